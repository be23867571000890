/// Размер ответа с разделителями тысяч (точками): 1234567 -> "1.234.567"
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let bytes = digits.as_bytes();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(*ch as char);
    }
    result
}
