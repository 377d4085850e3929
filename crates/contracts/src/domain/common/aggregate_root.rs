use super::RecordId;

/// Трейт для корня агрегата
///
/// Общий минимум, который нужен спискам, таблицам и формам:
/// идентификатор записи и её отображаемое имя.
pub trait AggregateRoot {
    /// Получить ID записи
    fn id(&self) -> &RecordId;

    /// Получить название записи (для заголовков и подтверждений)
    fn display_name(&self) -> &str;
}
