pub mod declaration_fixtures;
pub mod output_assertions;
