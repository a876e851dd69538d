/// Трейт для корня агрегата CRM
///
/// Определяет идентификатор записи и статические метаданные для UI.
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: super::AggregateId;

    /// Получить ID записи
    fn id(&self) -> &Self::Id;

    /// Получить описание/название записи
    fn description(&self) -> &str;

    /// Имя коллекции (например, "customers")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;
}
