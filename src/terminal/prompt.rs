use crate::fs::display_path;

/// Plain prompt, `visitor@portfolio:~/projects$ `.
pub fn prompt_for(cwd: &str) -> String {
    format!("visitor@portfolio:{}$ ", display_path(cwd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_abbreviates_home() {
        assert_eq!(prompt_for("/home/visitor"), "visitor@portfolio:~$ ");
        assert_eq!(prompt_for("/home/visitor/projects"), "visitor@portfolio:~/projects$ ");
        assert_eq!(prompt_for("/etc"), "visitor@portfolio:/etc$ ");
        assert_eq!(prompt_for("/home/visitors"), "visitor@portfolio:/home/visitors$ ");
    }
}
