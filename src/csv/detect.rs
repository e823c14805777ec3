//! Field delimiter auto-detection

/// Pick the field separator for a file by inspecting its first content line.
///
/// Counts commas and semicolons in the sample; the semicolon wins ties because
/// regional spreadsheet exports separate fields with `;` and reserve `,` for
/// decimals. A line with neither character falls back to the comma.
///
/// The choice is made once per file and applied uniformly, even if later lines
/// would score differently.
pub fn detect_delimiter(sample_line: &str) -> u8 {
    let commas = sample_line.bytes().filter(|&b| b == b',').count();
    let semicolons = sample_line.bytes().filter(|&b| b == b';').count();

    if commas == 0 && semicolons == 0 {
        b','
    } else if semicolons >= commas {
        b';'
    } else {
        b','
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_majority() {
        assert_eq!(detect_delimiter("a,b,c;d"), b',');
    }

    #[test]
    fn test_semicolon_majority() {
        assert_eq!(detect_delimiter("a;b;c,d"), b';');
    }

    #[test]
    fn test_tie_prefers_semicolon() {
        assert_eq!(detect_delimiter("a,b;c"), b';');
    }

    #[test]
    fn test_no_separator_defaults_to_comma() {
        assert_eq!(detect_delimiter("cabecalho"), b',');
        assert_eq!(detect_delimiter(""), b',');
    }

    #[test]
    fn test_single_separator_lines() {
        assert_eq!(detect_delimiter("Situacao,qtd"), b',');
        assert_eq!(detect_delimiter("Situacao;qtd"), b';');
    }
}
