//! Ошибки операций над списками (экспорт, массовые действия)

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// Действие вызвано без выбранных записей
    #[error("No records selected")]
    EmptySelection,

    /// Не удалось сформировать или сохранить файл
    #[error("Export failed: {0}")]
    ExportFailure(String),

    /// Хранилище отклонило массовое действие, локальные изменения откатены
    #[error("Bulk action failed: {0}")]
    BulkActionFailed(String),
}
