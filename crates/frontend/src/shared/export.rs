/// Экспорт списка в PDF через печать из отдельного окна браузера
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Задержка перед вызовом print(), чтобы окно успело отрисовать документ, мс
const PRINT_DELAY_MS: i32 = 250;

/// Trait для типов, которые могут быть выведены таблицей для печати
pub trait PrintExportable {
    /// Возвращает массив заголовков колонок (без колонки "No")
    fn headers() -> Vec<&'static str>;

    /// Значения ячеек одной строки
    fn to_print_row(&self) -> Vec<String>;
}

const PRINT_CSS: &str = r#"
    *{ box-sizing: border-box; }
    body{ font: 13px/1.4 system-ui, -apple-system, "Segoe UI", Roboto, Arial, sans-serif; color:#0f172a; margin:24px; }
    h1{ font-size:18px; margin:0 0 4px; }
    .meta{ color:#475569; margin:0 0 12px; }
    table{ width:100%; border-collapse:collapse; }
    th, td{ border:1px solid #cbd5e1; padding:6px 8px; text-align:left; }
    th{ background:#f1f5f9; }
    tr{ break-inside: avoid; page-break-inside: avoid; }
    @page { margin: 15mm; }
    @media print { body{ margin:0; } }
"#;

/// Экранирование текста для вставки в HTML
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Собирает HTML документ с таблицей; первая колонка — порядковый номер
pub fn build_print_document<T: PrintExportable>(title: &str, subtitle: &str, data: &[T]) -> String {
    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>", escape_html(title)));
    if !subtitle.is_empty() {
        body.push_str(&format!("<p class=\"meta\">{}</p>", escape_html(subtitle)));
    }

    body.push_str("<table><thead><tr><th>No</th>");
    for header in T::headers() {
        body.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    body.push_str("</tr></thead><tbody>");

    for (index, item) in data.iter().enumerate() {
        body.push_str(&format!("<tr><td>{}</td>", index + 1));
        for cell in item.to_print_row() {
            body.push_str(&format!("<td>{}</td>", escape_html(&cell)));
        }
        body.push_str("</tr>");
    }
    body.push_str("</tbody></table>");

    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{}</title><style>{}</style></head><body>{}</body></html>",
        escape_html(title),
        PRINT_CSS,
        body
    )
}

/// Открывает документ в новом окне и вызывает диалог печати (сохранение в PDF)
pub fn export_to_pdf<T: PrintExportable>(data: &[T], title: &str, subtitle: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Tidak ada data untuk diekspor".to_string());
    }

    let html = build_print_document(title, subtitle, data);

    let window = web_sys::window().ok_or("No window object")?;
    let print_window = window
        .open_with_url_and_target("about:blank", "_blank")
        .map_err(|e| format!("Failed to open window: {:?}", e))?
        .ok_or("Popup blocked")?;
    let document = print_window.document().ok_or("No document object")?;
    let root = document.document_element().ok_or("No document element")?;
    root.set_inner_html(&html);
    let _ = print_window.focus();

    let target = print_window.clone();
    let print = Closure::once(move || {
        if let Err(e) = target.print() {
            log::error!("print() failed: {:?}", e);
        }
    });
    print_window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            print.as_ref().unchecked_ref(),
            PRINT_DELAY_MS,
        )
        .map_err(|e| format!("Failed to schedule print: {:?}", e))?;
    print.forget();

    log::info!("Exported {} rows to print window", data.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, &'static str);

    impl PrintExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Nama", "Jurusan"]
        }

        fn to_print_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_document_has_numbered_rows() {
        let html = build_print_document("Data Teknisi", "", &[Row("Budi", "TKJ"), Row("Sari", "RPL")]);

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<th>No</th><th>Nama</th><th>Jurusan</th>"));
        assert!(html.contains("<tr><td>1</td><td>Budi</td><td>TKJ</td></tr>"));
        assert!(html.contains("<tr><td>2</td><td>Sari</td><td>RPL</td></tr>"));
        assert!(!html.contains("class=\"meta\""));
    }

    #[test]
    fn test_document_escapes_cells() {
        let html = build_print_document("A & B", "q=\"x\"", &[Row("<script>", "R&D")]);

        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("q=&quot;x&quot;"));
        assert!(html.contains("<td>&lt;script&gt;</td><td>R&amp;D</td>"));
        assert!(!html.contains("<script>"));
    }
}
