pub mod app_error;
pub mod validated_path;
pub mod validated_query;
