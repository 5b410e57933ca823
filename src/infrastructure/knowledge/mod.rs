mod file_glossary_store;

pub use file_glossary_store::FileGlossaryStore;
