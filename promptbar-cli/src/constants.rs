pub const PROMPTBAR_CLI: &str = "promptbar";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
