pub mod agent;
pub mod llm;
pub mod memory;
pub mod output_parser;
pub mod schemas;
pub mod template;
pub mod tools;
