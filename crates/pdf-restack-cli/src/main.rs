use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

use pdf_restack::commands::{generate, merge, pad, pagenum, reorder, split};
use pdf_restack::constants::{DEFAULT_PAGE_HEIGHT_PT, DEFAULT_PAGE_WIDTH_PT};
use pdf_restack::{
    GenerateOptions, HorizontalAnchor, MergeOptions, NumberingOptions, PadOptions, PadPosition,
    ReorderOptions, SkipRule, SplitOptions, VerticalAnchor, expr,
};

#[derive(Parser)]
#[command(name = "pdfr", about = "PDF page restacking CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a dummy PDF with numbered pages
    #[command(visible_alias = "gen")]
    Generate {
        /// Number of pages to generate
        pages: usize,

        /// Page orientation
        #[arg(long, default_value = "portrait", value_enum)]
        orientation: OrientationArg,

        /// Page width in points; accepts arithmetic like "a4/3"
        #[arg(long)]
        width: Option<String>,

        /// Page height in points; accepts arithmetic like "a4*2"
        #[arg(long)]
        height: Option<String>,

        /// Output PDF file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge consecutive pages side by side onto shared pages
    Merge {
        /// Source pages per merged page
        #[arg(long, default_value = "2")]
        chunk: usize,

        /// Input PDF file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output PDF file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Split each page into equal-width vertical strips
    Split {
        /// Strips per source page
        #[arg(long, default_value = "2")]
        chunk: usize,

        /// Input PDF file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output PDF file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Insert blank pages into the document
    Pad {
        /// Number of blank pages, or the target multiple with --multiple
        pages: usize,

        /// Pad until the page count is a multiple of PAGES
        #[arg(long)]
        multiple: bool,

        /// Where to insert: "start", "end", or a 0-based index
        #[arg(long, default_value = "end", value_parser = PadPosition::from_str)]
        position: PadPosition,

        /// Blank page width in points; accepts arithmetic like "a4/3"
        #[arg(long)]
        width: Option<String>,

        /// Blank page height in points; accepts arithmetic like "a4*2"
        #[arg(long)]
        height: Option<String>,

        /// Input PDF file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output PDF file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Reorder pages by a named scheme
    Reorder {
        /// Ordering scheme
        #[arg(value_enum)]
        order: SchemeArg,

        /// Input PDF file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output PDF file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Draw page numbers onto each page
    #[command(visible_aliases = ["num", "nums", "numbers"])]
    Pagenum {
        /// Leading pages left unnumbered; numbering restarts at 1 after them
        #[arg(long, default_value = "0")]
        offset: usize,

        /// Numbers to skip, comma separated; "last" skips the final page
        #[arg(long, value_delimiter = ',', value_parser = SkipRule::from_str)]
        skip: Vec<SkipRule>,

        /// Vertical anchor: "top", "bottom", "middle", or a y coordinate
        #[arg(long, default_value = "bottom", value_parser = VerticalAnchor::from_str)]
        horizontal: VerticalAnchor,

        /// Horizontal anchor: "left", "right", "middle", or an x coordinate
        #[arg(long, default_value = "left", value_parser = HorizontalAnchor::from_str)]
        vertical: HorizontalAnchor,

        /// Mirror the horizontal anchor across pages
        #[arg(long, value_enum)]
        alternate: Option<AlternateArg>,

        /// Standard font for the numbers
        #[arg(long, default_value = "helvetica-bold", value_enum)]
        font: FontArg,

        /// Font size in points (default: 5% of page width)
        #[arg(long)]
        size: Option<f32>,

        /// Distance from the page edge in points (default: 5% of page width)
        #[arg(long)]
        padding: Option<f32>,

        /// Input PDF file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output PDF file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemeArg {
    Weave,
    Unweave,
    Pamphlet,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlternateArg {
    Parity,
    Halves,
}

#[derive(Clone, Copy, ValueEnum)]
enum FontArg {
    Helvetica,
    HelveticaBold,
    TimesRoman,
    Courier,
}

impl From<OrientationArg> for pdf_restack::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<SchemeArg> for pdf_restack::ReorderScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Weave => Self::Weave,
            SchemeArg::Unweave => Self::Unweave,
            SchemeArg::Pamphlet => Self::Pamphlet,
        }
    }
}

impl From<AlternateArg> for pdf_restack::AlternateMode {
    fn from(arg: AlternateArg) -> Self {
        match arg {
            AlternateArg::Parity => Self::Parity,
            AlternateArg::Halves => Self::Halves,
        }
    }
}

impl From<FontArg> for pdf_restack::StandardFont {
    fn from(arg: FontArg) -> Self {
        match arg {
            FontArg::Helvetica => Self::Helvetica,
            FontArg::HelveticaBold => Self::HelveticaBold,
            FontArg::TimesRoman => Self::TimesRoman,
            FontArg::Courier => Self::Courier,
        }
    }
}

/// Evaluate an optional dimension expression, with `a4` bound to the
/// matching default extent
fn eval_extent(expr: Option<&str>, a4: f32) -> Result<f32> {
    match expr {
        Some(input) => Ok(expr::eval_dimension(input, a4)?),
        None => Ok(a4),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            pages,
            orientation,
            width,
            height,
            output,
        } => {
            let options = GenerateOptions {
                pages,
                orientation: orientation.into(),
                width: eval_extent(width.as_deref(), DEFAULT_PAGE_WIDTH_PT)?,
                height: eval_extent(height.as_deref(), DEFAULT_PAGE_HEIGHT_PT)?,
            };
            generate::run(options, output.as_deref()).await?;
        }

        Commands::Merge {
            chunk,
            input,
            output,
        } => {
            let options = MergeOptions { chunk };
            merge::run(options, input.as_deref(), output.as_deref()).await?;
        }

        Commands::Split {
            chunk,
            input,
            output,
        } => {
            let options = SplitOptions { chunk };
            split::run(options, input.as_deref(), output.as_deref()).await?;
        }

        Commands::Pad {
            pages,
            multiple,
            position,
            width,
            height,
            input,
            output,
        } => {
            let options = PadOptions {
                pages,
                multiple,
                position,
                width: width
                    .as_deref()
                    .map(|w| expr::eval_dimension(w, DEFAULT_PAGE_WIDTH_PT))
                    .transpose()?,
                height: height
                    .as_deref()
                    .map(|h| expr::eval_dimension(h, DEFAULT_PAGE_HEIGHT_PT))
                    .transpose()?,
            };
            pad::run(options, input.as_deref(), output.as_deref()).await?;
        }

        Commands::Reorder {
            order,
            input,
            output,
        } => {
            let options = ReorderOptions {
                scheme: order.into(),
            };
            reorder::run(options, input.as_deref(), output.as_deref()).await?;
        }

        Commands::Pagenum {
            offset,
            skip,
            horizontal,
            vertical,
            alternate,
            font,
            size,
            padding,
            input,
            output,
        } => {
            let options = NumberingOptions {
                offset,
                skip,
                horizontal,
                vertical,
                alternate: alternate.map(Into::into),
                font: font.into(),
                size,
                padding,
            };
            pagenum::run(options, input.as_deref(), output.as_deref()).await?;
        }
    }

    Ok(())
}
