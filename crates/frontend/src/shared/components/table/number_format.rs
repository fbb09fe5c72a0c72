//! Утилиты форматирования чисел для таблиц

/// Форматирует число с разделителем тысяч (запятая) и указанным количеством знаков после точки
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals as usize, value.abs());

    // Разделяем целую и дробную части
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };

    // Вставляем запятые каждые 3 цифры с конца целой части
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let formatted_integer: String = result.chars().rev().collect();

    let sign = if value < 0.0 && formatted.trim_matches(|c| c == '0' || c == '.') != "" {
        "-"
    } else {
        ""
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, formatted_integer, d),
        None => format!("{}{}", sign, formatted_integer),
    }
}

/// Денежное значение в долларах: `$1,234.50`, отрицательные как `-$5.00`
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::format_currency;
/// assert_eq!(format_currency(1234567.891, 2), "$1,234,567.89");
/// ```
pub fn format_currency(value: f64, fraction_digits: u8) -> String {
    let number = format_number_with_decimals(value, fraction_digits);
    match number.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None => format!("${}", number),
    }
}

/// Форматирует целое число с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}
