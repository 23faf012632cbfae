use clap::Parser;

/// Convert a single PDF page to an SVG file.
///
/// Rendering is delegated to MuPDF. Text is emitted as vector paths rather
/// than <text> elements, so the output looks identical even on systems that
/// lack the document's fonts.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Path to the input PDF file
    input: String,

    /// 1-based page number to convert
    page: i64,

    /// Path to the output SVG file
    output: String,
}

fn main() {
    let args = Args::parse();

    match pdf2svg::convert_page(&args.input, args.page, &args.output) {
        Ok(_) => println!(
            "Converted page {} of {} to {}",
            args.page, args.input, args.output
        ),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_positional_arguments() {
        let args = Args::try_parse_from(["pdf2svg", "in.pdf", "3", "out.svg"]).unwrap();
        assert_eq!(args.input, "in.pdf");
        assert_eq!(args.page, 3);
        assert_eq!(args.output, "out.svg");
    }

    #[test]
    fn rejects_missing_arguments() {
        assert!(Args::try_parse_from(["pdf2svg"]).is_err());
        assert!(Args::try_parse_from(["pdf2svg", "in.pdf"]).is_err());
        assert!(Args::try_parse_from(["pdf2svg", "in.pdf", "1"]).is_err());
    }

    #[test]
    fn rejects_non_numeric_page() {
        assert!(Args::try_parse_from(["pdf2svg", "in.pdf", "two", "out.svg"]).is_err());
    }
}
