/// A single test; every test given on the command line must hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Name { pattern: String },
    Type(FileType),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileType {
    File,      // f
    Directory, // d
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindOptions {
    pub max_depth: Option<usize>,
    pub min_depth: Option<usize>,
}

/// What the matcher knows about one visited entry.
#[derive(Debug, Clone)]
pub struct EvalContext<'a> {
    pub name: &'a str,
    pub is_directory: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindQuery {
    pub path: Option<String>,
    pub tests: Vec<Expression>,
    pub options: FindOptions,
}
