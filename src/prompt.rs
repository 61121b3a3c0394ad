//! Interactive console prompts
//!
//! Used for values that were not given on the command line.

use colored::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::mutate::validate_base_word;
use crate::output::DEFAULT_OUTPUT_NAME;

/// Print `label`, read one line and return it trimmed
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<String> {
    write!(output, "{} {}", "?".cyan().bold(), label)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask for the base word. Validation happens in the generator.
pub fn prompt_base_word<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    prompt_line(input, output, "Base word: ")
}

/// Ask for the output file, falling back to `morph.txt` on empty input
pub fn prompt_output_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<PathBuf> {
    let label = format!("Output file name (default: {}): ", DEFAULT_OUTPUT_NAME);
    let answer = prompt_line(input, output, &label)?;

    if answer.is_empty() {
        Ok(PathBuf::from(DEFAULT_OUTPUT_NAME))
    } else {
        Ok(PathBuf::from(answer))
    }
}

/// Take base word and output path from flags, prompting for whatever is missing.
///
/// The base word is validated before the output file is asked for.
pub fn resolve_inputs<R: BufRead, W: Write>(
    word: Option<&str>,
    output_path: Option<&Path>,
    input: &mut R,
    output: &mut W,
) -> Result<(String, PathBuf)> {
    let base_word = match word {
        Some(word) => word.trim().to_string(),
        None => prompt_base_word(input, output)?,
    };

    validate_base_word(&base_word)?;

    let output_path = match output_path {
        Some(path) => path.to_path_buf(),
        None => prompt_output_path(input, output)?,
    };

    Ok((base_word, output_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_answer() {
        let mut input = Cursor::new("  dragon \n");
        let mut output = Vec::new();

        let word = prompt_base_word(&mut input, &mut output).unwrap();
        assert_eq!(word, "dragon");
        assert!(String::from_utf8_lossy(&output).contains("Base word:"));
    }

    #[test]
    fn test_output_path_default() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();

        let path = prompt_output_path(&mut input, &mut output).unwrap();
        assert_eq!(path, PathBuf::from("morph.txt"));
    }

    #[test]
    fn test_output_path_given() {
        let mut input = Cursor::new("lists/cat.txt\n");
        let mut output = Vec::new();

        let path = prompt_output_path(&mut input, &mut output).unwrap();
        assert_eq!(path, PathBuf::from("lists/cat.txt"));
    }

    #[test]
    fn test_prompt_at_eof_is_empty() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        assert_eq!(prompt_base_word(&mut input, &mut output).unwrap(), "");
    }

    #[test]
    fn test_resolve_inputs_prompts_for_missing_values() {
        let mut input = Cursor::new(" admin \n\n");
        let mut output = Vec::new();

        let (word, path) = resolve_inputs(None, None, &mut input, &mut output).unwrap();
        assert_eq!(word, "admin");
        assert_eq!(path, PathBuf::from("morph.txt"));
    }

    #[test]
    fn test_resolve_inputs_uses_flags_without_prompting() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let (word, path) =
            resolve_inputs(Some(" cat "), Some(Path::new("cat.txt")), &mut input, &mut output).unwrap();
        assert_eq!(word, "cat");
        assert_eq!(path, PathBuf::from("cat.txt"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_resolve_inputs_rejects_empty_word_before_asking_for_file() {
        let mut input = Cursor::new("   \nout.txt\n");
        let mut output = Vec::new();

        let result = resolve_inputs(None, None, &mut input, &mut output);
        assert!(matches!(result, Err(crate::error::MorphError::EmptyBaseWord)));
        assert!(!String::from_utf8_lossy(&output).contains("Output file name"));
    }
}
