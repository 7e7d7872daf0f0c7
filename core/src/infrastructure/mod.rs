pub mod db;
pub mod household;
pub mod llm;
pub mod recipe;
