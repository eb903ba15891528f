//! Phone number masking
//!
//! Raw phone values are stored as the country code followed by digits
//! (`"+79991234567"`) and displayed through a mask where `#` stands for a
//! digit (`"+7 (999) 123-45-67"`).

/// Country code used when none is configured
pub const DEFAULT_COUNTRY_CODE: &str = "+7";
/// Mask applied after the country code
pub const DEFAULT_PHONE_MASK: &str = "(###) ###-##-##";

const MASK_SYMBOLS: &[char] = &[' ', '-', '_', '(', ')'];

/// Format a raw phone value through a mask
///
/// Output stops after the last available digit, so partial input never gets
/// trailing literals. An empty value formats to an empty string.
///
/// ```
/// use tui_quantum_core::phone::format_phone;
///
/// assert_eq!(
///     format_phone("+79991234567", "+7", "(###) ###-##-##"),
///     "+7 (999) 123-45-67"
/// );
/// assert_eq!(format_phone("+7999", "+7", "(###) ###-##-##"), "+7 (999");
/// ```
pub fn format_phone(value: &str, country_code: &str, mask: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let bare_code: String = country_code
        .chars()
        .filter(|c| !matches!(c, '(' | ')'))
        .collect();
    let national = value.strip_prefix(bare_code.as_str()).unwrap_or(value);
    let mut digits = national.chars().peekable();

    let mut result = format!("{country_code} ");
    for symbol in mask.chars() {
        if digits.peek().is_none() {
            break;
        }
        if symbol == '#' {
            result.extend(digits.next());
        } else {
            result.push(symbol);
        }
    }
    result
}

/// Remove mask decoration: spaces, dashes, underscores and parentheses
pub fn strip_mask_symbols(text: &str) -> String {
    text.chars().filter(|c| !MASK_SYMBOLS.contains(c)).collect()
}

/// Number of digit slots in a mask
pub fn mask_capacity(mask: &str) -> usize {
    mask.chars().filter(|&c| c == '#').count()
}

/// Length of a complete raw value: country code plus every digit slot
pub fn max_phone_length(country_code: &str, mask: &str) -> usize {
    country_code.chars().count() + mask_capacity(mask)
}

/// Normalize pasted or dropped text into a raw phone value
///
/// When `current` already holds a partial number, the pasted digits are
/// appended. A full-length paste has its national prefix dropped (`7` or `8`
/// for `+7`, the country digits otherwise). The result never exceeds
/// [`max_phone_length`].
pub fn clean_phone(current: &str, pasted: &str, country_code: &str, mask: &str) -> String {
    let max_len = max_phone_length(country_code, mask);
    let code_len = country_code.chars().count();
    let current_len = current.chars().count();
    let digits: String = pasted.chars().filter(char::is_ascii_digit).collect();

    let joined = if current_len > code_len && current_len < max_len {
        format!("{current}{digits}")
    } else if strip_mask_symbols(pasted).chars().count() + 1 < max_len {
        format!("{country_code}{digits}")
    } else {
        format!("{country_code}{}", strip_national_prefix(&digits, country_code))
    };

    joined.chars().take(max_len).collect()
}

fn strip_national_prefix<'a>(digits: &'a str, country_code: &str) -> &'a str {
    if country_code == DEFAULT_COUNTRY_CODE {
        return digits
            .strip_prefix(['7', '8'])
            .unwrap_or(digits);
    }
    let code_digits = country_code.trim_start_matches('+');
    digits.strip_prefix(code_digits).unwrap_or(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASK: &str = DEFAULT_PHONE_MASK;

    #[test]
    fn test_format_full_number() {
        assert_eq!(format_phone("+79991234567", "+7", MASK), "+7 (999) 123-45-67");
    }

    #[test]
    fn test_format_partial_number() {
        assert_eq!(format_phone("+7", "+7", MASK), "+7 ");
        assert_eq!(format_phone("+79", "+7", MASK), "+7 (9");
        assert_eq!(format_phone("+7999", "+7", MASK), "+7 (999");
        assert_eq!(format_phone("+79991", "+7", MASK), "+7 (999) 1");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_phone("", "+7", MASK), "");
    }

    #[test]
    fn test_format_other_country() {
        assert_eq!(
            format_phone("+3751234567", "+375", "## ###-##-##"),
            "+375 12 345-67"
        );
        assert_eq!(format_phone("+12025550123", "+1", "###-###-####"), "+1 202-555-0123");
    }

    #[test]
    fn test_format_code_with_parentheses() {
        assert_eq!(format_phone("+1264555", "+1(264)", "###-####"), "+1(264) 555");
    }

    #[test]
    fn test_strip_mask_symbols() {
        assert_eq!(strip_mask_symbols("+7 (999) 123-45_67"), "+79991234567");
    }

    #[test]
    fn test_max_phone_length() {
        assert_eq!(max_phone_length("+7", MASK), 12);
        assert_eq!(mask_capacity("###-####"), 7);
    }

    #[test]
    fn test_clean_short_paste() {
        assert_eq!(clean_phone("", "999 123", "+7", MASK), "+7999123");
    }

    #[test]
    fn test_clean_appends_to_partial_value() {
        assert_eq!(clean_phone("+7999", "123", "+7", MASK), "+7999123");
        assert_eq!(clean_phone("+7999", "1234567890", "+7", MASK), "+79991234567");
    }

    #[test]
    fn test_clean_full_paste_drops_national_prefix() {
        assert_eq!(clean_phone("", "8 (999) 123-45-67", "+7", MASK), "+79991234567");
        assert_eq!(clean_phone("", "+7 999 123 45 67", "+7", MASK), "+79991234567");
        assert_eq!(
            clean_phone("", "375 29 123 45 67", "+375", "## ###-##-##"),
            "+375291234567"
        );
    }
}
