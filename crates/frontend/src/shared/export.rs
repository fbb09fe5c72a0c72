/// Экспорт выбранных записей в CSV и сохранение файла в браузере
use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::error::ListError;
use crate::shared::selection::SelectionSet;
use contracts::domain::common::Entity;

const DELIMITER: char = ',';

/// Колонка выгрузки: заголовок и функция получения значения
pub struct CsvColumn<T> {
    pub header: &'static str,
    pub value: fn(&T) -> String,
}

impl<T> CsvColumn<T> {
    pub const fn new(header: &'static str, value: fn(&T) -> String) -> Self {
        Self { header, value }
    }
}

/// Trait для типов, которые могут быть выгружены в CSV
pub trait CsvExportable: Sized {
    /// Имя сущности для имени файла ("products", "orders", ...)
    const ENTITY: &'static str;

    fn columns() -> Vec<CsvColumn<Self>>;
}

/// Куда отдаётся готовый текст (в браузере это скачивание файла)
pub trait FileSaver {
    fn save(&self, content: &str, filename: &str) -> Result<(), ListError>;
}

/// Формирует CSV: первая строка заголовки, далее по строке на запись в исходном порядке
pub fn to_csv<T>(records: &[T], columns: &[CsvColumn<T>]) -> Result<String, ListError> {
    render_csv(records.iter(), columns)
}

fn render_csv<'a, T: 'a>(
    records: impl Iterator<Item = &'a T>,
    columns: &[CsvColumn<T>],
) -> Result<String, ListError> {
    let mut records = records.peekable();
    if records.peek().is_none() {
        return Err(ListError::EmptySelection);
    }

    let mut csv_content = String::new();

    let headers: Vec<String> = columns.iter().map(|c| escape_csv_cell(c.header)).collect();
    push_row(&mut csv_content, &headers);

    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|c| escape_csv_cell(&(c.value)(record)))
            .collect();
        push_row(&mut csv_content, &row);
    }

    Ok(csv_content)
}

fn push_row(out: &mut String, cells: &[String]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        out.push_str(cell);
    }
    out.push('\n');
}

/// Экранирует CSV ячейку если необходимо
fn escape_csv_cell(cell: &str) -> String {
    // Если ячейка содержит разделитель, кавычки или перевод строки, оборачиваем в кавычки
    if cell.contains(DELIMITER) || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        // Удваиваем кавычки внутри значения
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

/// `{entity}_{YYYY-MM-DD}.csv`
pub fn export_filename(entity: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", entity, date.format("%Y-%m-%d"))
}

/// Выгружает выбранные записи (в порядке исходной коллекции).
/// Без выбора возвращает `EmptySelection` и не обращается к `saver`.
pub fn export_selected<T, S>(
    records: &[T],
    selection: &SelectionSet,
    saver: &S,
    today: NaiveDate,
) -> Result<usize, ListError>
where
    T: CsvExportable + Entity,
    S: FileSaver + ?Sized,
{
    if selection.is_empty() {
        return Err(ListError::EmptySelection);
    }

    let chosen: Vec<&T> = records
        .iter()
        .filter(|r| selection.contains(r.id()))
        .collect();
    if chosen.is_empty() {
        return Err(ListError::EmptySelection);
    }

    let content = render_csv(chosen.iter().copied(), &T::columns())?;

    let filename = export_filename(T::ENTITY, today);
    saver.save(&content, &filename)?;
    log::info!("exported {} {} to {}", chosen.len(), T::ENTITY, filename);
    Ok(chosen.len())
}

/// Сохранение через временную ссылку `<a download>`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDownload;

impl FileSaver for BrowserDownload {
    fn save(&self, content: &str, filename: &str) -> Result<(), ListError> {
        create_csv_blob(content)
            .and_then(|blob| download_blob(&blob, filename))
            .map_err(|e| {
                log::error!("csv download failed: {}", e);
                ListError::ExportFailure(e)
            })
    }
}

/// Создает Blob объект с CSV данными
fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    // Добавляем в DOM, кликаем и удаляем
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[derive(Debug, Clone)]
    struct Note {
        id: String,
        text: String,
        amount: f64,
    }

    impl Entity for Note {
        fn id(&self) -> &str {
            &self.id
        }
    }

    impl CsvExportable for Note {
        const ENTITY: &'static str = "notes";

        fn columns() -> Vec<CsvColumn<Self>> {
            vec![
                CsvColumn::new("ID", |n: &Note| n.id.clone()),
                CsvColumn::new("Text", |n: &Note| n.text.clone()),
                CsvColumn::new("Amount", |n: &Note| format!("{:.2}", n.amount)),
            ]
        }
    }

    fn notes() -> Vec<Note> {
        vec![
            Note {
                id: "n-1".to_string(),
                text: "plain text".to_string(),
                amount: 1.5,
            },
            Note {
                id: "n-2".to_string(),
                text: "Smith, John".to_string(),
                amount: 20.0,
            },
            Note {
                id: "n-3".to_string(),
                text: "the \"best\" one".to_string(),
                amount: 3.25,
            },
        ]
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn header_row_then_records_in_order() {
        let csv = to_csv(&notes(), &Note::columns()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ID,Text,Amount");
        assert_eq!(lines[1], "n-1,plain text,1.50");
        assert_eq!(lines[2], "n-2,\"Smith, John\",20.00");
        assert_eq!(lines[3], "n-3,\"the \"\"best\"\" one\",3.25");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn standard_parser_reads_back_original_values() {
        let records = notes();
        let csv = to_csv(&records, &Note::columns()).unwrap();

        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv.as_bytes());
        let texts: Vec<String> = reader
            .records()
            .map(|r| r.unwrap().get(1).unwrap().to_string())
            .collect();
        let expected: Vec<String> = records.iter().map(|n| n.text.clone()).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn empty_input_is_an_error() {
        let empty: Vec<Note> = Vec::new();
        assert_eq!(to_csv(&empty, &Note::columns()), Err(ListError::EmptySelection));
    }

    #[test]
    fn filename_uses_entity_and_iso_date() {
        assert_eq!(export_filename("orders", date()), "orders_2026-10-19.csv");
    }

    #[test]
    fn empty_selection_never_reaches_saver() {
        let saver = RecordingSaver::default();
        let result = export_selected(&notes(), &SelectionSet::new(), &saver, date());
        assert_eq!(result, Err(ListError::EmptySelection));
        assert!(saver.saved.borrow().is_empty());
    }

    #[test]
    fn exports_only_selected_in_source_order() {
        let saver = RecordingSaver::default();
        let mut selection = SelectionSet::new();
        selection.toggle_all(["n-3", "n-1"], true);

        let count = export_selected(&notes(), &selection, &saver, date()).unwrap();
        assert_eq!(count, 2);

        let saved = saver.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, "notes_2026-10-19.csv");
        let ids: Vec<&str> = saved[0]
            .1
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap_or(""))
            .collect();
        assert_eq!(ids, vec!["n-1", "n-3"]);
    }

    #[test]
    fn selection_of_missing_records_is_empty() {
        let saver = RecordingSaver::default();
        let mut selection = SelectionSet::new();
        selection.set("gone", true);
        let result = export_selected(&notes(), &selection, &saver, date());
        assert_eq!(result, Err(ListError::EmptySelection));
    }

    #[test]
    fn saver_failure_is_reported() {
        let mut selection = SelectionSet::new();
        selection.set("n-1", true);
        let result = export_selected(&notes(), &selection, &FailingSaver, date());
        assert!(matches!(result, Err(ListError::ExportFailure(_))));
    }
}
