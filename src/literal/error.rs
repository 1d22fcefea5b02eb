use super::MotifRule;

pub type Result<T> = std::result::Result<T, pest::error::Error<MotifRule>>;
