use crate::shared::validation::Validate;

/// Common surface of every record the console lists.
///
/// Instance methods describe one record, the associated functions describe
/// the record type (its tab key, labels and REST collection path).
pub trait AggregateRoot: Validate {
    /// Identifier of the record, unique and immutable.
    fn id(&self) -> &str;

    /// Short caption of the record for tab titles and logs.
    fn caption(&self) -> String;

    /// Index of the aggregate in the system (e.g. "a001").
    fn aggregate_index() -> &'static str;

    /// Collection name (e.g. "job").
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Job").
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Jobs").
    fn list_name() -> &'static str;

    /// REST collection path relative to `/api` (e.g. "/practice-management/jobs").
    fn endpoint() -> &'static str;

    /// Full name used as tab key (e.g. "a001_job").
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
