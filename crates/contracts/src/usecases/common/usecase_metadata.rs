/// Identification and documentation metadata of a UseCase
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u508")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "nl_query")
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name like "u508_nl_query"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
