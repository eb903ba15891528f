//! End-to-end flows: events through components into a reducer

use tui_quantum::testing::{click, key_event, RenderHarness, TestHarness};
use tui_quantum::{
    assert_emitted, Action, Component, EventKind, PhoneInput, PhoneInputProps, RangeSlider,
    RangeSliderProps, Slider, SliderConfig, SliderProps,
};

#[derive(Clone, Debug, PartialEq)]
enum AppAction {
    SetPrice(f64),
    SetRange((f64, f64)),
    SetPhone(String),
    SubmitPhone(String),
}

impl Action for AppAction {
    fn name(&self) -> &'static str {
        match self {
            AppAction::SetPrice(_) => "SetPrice",
            AppAction::SetRange(_) => "SetRange",
            AppAction::SetPhone(_) => "SetPhone",
            AppAction::SubmitPhone(_) => "SubmitPhone",
        }
    }
}

#[derive(Default)]
struct AppState {
    price: f64,
    range: (f64, f64),
    phone: String,
    submitted: Option<String>,
}

fn reducer(state: &mut AppState, action: AppAction) -> bool {
    match action {
        AppAction::SetPrice(price) => {
            state.price = price;
            true
        }
        AppAction::SetRange(range) => {
            state.range = range;
            true
        }
        AppAction::SetPhone(phone) => {
            state.phone = phone;
            true
        }
        AppAction::SubmitPhone(phone) => {
            state.submitted = Some(phone);
            false
        }
    }
}

const PRICE_CONFIG: &str = r#"{
    "min": 0,
    "max": 10000,
    "quantum": 100,
    "key_steps": [[50, 1000]],
    "keymap": { "increment": ["right", "+"], "decrement": ["left", "-"] }
}"#;

#[test]
fn test_configured_slider_drives_state() {
    let config = SliderConfig::from_json(PRICE_CONFIG).unwrap();
    let scale = config.build().unwrap();
    let bindings = config.bindings().unwrap();
    let mut slider = Slider::new();
    let mut harness = TestHarness::<AppState, AppAction>::default();

    for event in ["+", "+", "right", "-"] {
        let props = SliderProps {
            scale: &scale,
            value: harness.state.price,
            keymap: &bindings,
            is_focused: true,
            show_border: true,
            label: Some("Price"),
            on_change: AppAction::SetPrice,
        };
        harness.emit_all(slider.handle_event(&key_event(event), props));
        harness.apply(reducer);
    }
    assert_eq!(harness.state.price, 200.0);

    // "k" is not bound in this keymap
    let props = SliderProps {
        scale: &scale,
        value: harness.state.price,
        keymap: &bindings,
        is_focused: true,
        show_border: true,
        label: None,
        on_change: AppAction::SetPrice,
    };
    harness.emit_all(slider.handle_event(&key_event("k"), props));
    assert!(!harness.has_emitted());
}

#[test]
fn test_click_maps_through_key_steps() {
    let config = SliderConfig::from_json(PRICE_CONFIG).unwrap();
    let scale = config.build().unwrap();
    let bindings = config.bindings().unwrap();
    let mut slider = Slider::new();
    let mut harness = TestHarness::<AppState, AppAction>::default();

    // 23 cell wide track at columns 0..=22, value text "0" after it
    let mut render = RenderHarness::new(25, 1);
    render.render(|frame| {
        let props = SliderProps {
            scale: &scale,
            value: 0.0,
            keymap: &bindings,
            is_focused: true,
            show_border: false,
            label: None,
            on_change: |_| AppAction::SetPrice(0.0),
        };
        slider.render(frame, frame.area(), props);
    });

    // Column 11 is 50% of the track: the key step at 1000
    let props = SliderProps {
        scale: &scale,
        value: 0.0,
        keymap: &bindings,
        is_focused: true,
        show_border: false,
        label: None,
        on_change: AppAction::SetPrice,
    };
    harness.emit_all(slider.handle_event(&click(11, 0), props));

    let emitted = harness.drain_emitted();
    assert_emitted!(emitted, AppAction::SetPrice(v) if *v == 1000.0);
}

#[test]
fn test_range_flow_keeps_order() {
    let scale = SliderConfig::from_json(r#"{"max": 10, "quantum": 1}"#)
        .unwrap()
        .build()
        .unwrap();
    let keymap = tui_quantum::SliderBindings::default();
    let mut range = RangeSlider::new();
    let mut harness = TestHarness::<AppState, AppAction>::new(AppState {
        range: (4.0, 6.0),
        ..Default::default()
    });

    let mut send = |harness: &mut TestHarness<AppState, AppAction>, event: EventKind| {
        let props = RangeSliderProps {
            scale: &scale,
            value: harness.state.range,
            keymap: &keymap,
            is_focused: true,
            show_border: true,
            label: None,
            on_change: AppAction::SetRange,
        };
        harness.emit_all(range.handle_event(&event, props));
        harness.apply(reducer)
    };

    // Left thumb runs into the right one and stops
    for _ in 0..5 {
        send(&mut harness, key_event("right"));
    }
    assert_eq!(harness.state.range, (6.0, 6.0));

    // Switch to the right thumb and push it to the end
    assert_eq!(send(&mut harness, key_event("tab")), 0);
    send(&mut harness, key_event("end"));
    assert_eq!(harness.state.range, (6.0, 10.0));
}

#[test]
fn test_phone_flow() {
    let mut input = PhoneInput::new();
    let mut harness = TestHarness::<AppState, AppAction>::default();

    let events = [
        EventKind::Paste("(999) 123".into()),
        key_event("4"),
        key_event("5"),
        key_event("backspace"),
        key_event("enter"),
    ];
    for event in events {
        let props = PhoneInputProps {
            value: &harness.state.phone,
            country_code: "+7",
            mask: "(###) ###-##-##",
            placeholder: "Phone",
            is_focused: true,
            on_change: AppAction::SetPhone,
            on_submit: AppAction::SubmitPhone,
        };
        let actions: Vec<_> = input.handle_event(&event, props).into_iter().collect();
        harness.emit_all(actions);
        harness.apply(reducer);
    }

    assert_eq!(harness.state.phone, "+79991234");
    assert_eq!(harness.state.submitted.as_deref(), Some("+79991234"));
}

#[test]
fn test_config_round_trips_through_json() {
    let config = SliderConfig::from_json(PRICE_CONFIG).unwrap();
    let text = serde_json::to_string(&config).unwrap();
    assert_eq!(SliderConfig::from_json(&text).unwrap(), config);
}
