/// Запись, которую можно найти по строковому идентификатору
///
/// Идентификатор уникален в пределах одной коллекции и не меняется
/// за время жизни записи.
pub trait Entity {
    fn id(&self) -> &str;
}
