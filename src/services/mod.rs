pub mod answer_normalizer;
pub mod claude_code_generator;
pub mod generator;
pub mod openai_generator;
pub mod output_sanitizer;
pub mod process_invoker;
pub mod prompt_builder;
pub mod result_unwrapper;
