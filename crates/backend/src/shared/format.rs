/// Человекочитаемый размер ответа для журнала запросов.
///
/// Romanian number format: decimal comma, dot as thousands separator.
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let value = bytes as f64;
    if value < KB {
        format!("{} B", group_thousands(bytes))
    } else if value < MB {
        format!("{} KB", one_decimal(value / KB))
    } else {
        format!("{} MB", one_decimal(value / MB))
    }
}

fn one_decimal(value: f64) -> String {
    let tenths = (value * 10.0).round() as usize;
    format!("{},{}", group_thousands(tenths / 10), tenths % 10)
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
