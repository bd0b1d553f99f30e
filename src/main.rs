use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use quotepad::{
    text_snapshot, FilePrinter, NoopPrinter, PrintFacility, Quotation, QuotationPad, RenderMode,
    RenderedDocument, SellerProfile,
};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "quotepad", version, about = "Render and print quotation documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a quotation to HTML (or plain text)
    Render {
        /// Quotation JSON file
        quotation: PathBuf,
        #[arg(long, value_enum, default_value_t = Mode::Interactive)]
        mode: Mode,
        /// Seller profile JSON overriding the built-in identity
        #[arg(long)]
        profile: Option<PathBuf>,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        /// Emit a text snapshot instead of HTML
        #[arg(long)]
        text: bool,
    },
    /// Run the print action once through the chosen backend
    Print {
        /// Quotation JSON file
        quotation: PathBuf,
        #[arg(long)]
        profile: Option<PathBuf>,
        /// Destination file (HTML for `file`, PDF for `cdp`)
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Backend::File)]
        backend: Backend,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Interactive,
    Print,
}

impl From<Mode> for RenderMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Interactive => RenderMode::Interactive,
            Mode::Print => RenderMode::Print,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Backend {
    File,
    Cdp,
}

fn load_profile(path: Option<&Path>) -> anyhow::Result<SellerProfile> {
    let mut profile = match path {
        Some(p) => SellerProfile::from_path(p)
            .with_context(|| format!("loading profile {}", p.display()))?,
        None => SellerProfile::default(),
    };
    profile.embed_logo().context("embedding logo")?;
    Ok(profile)
}

fn load_pad(
    quotation: &Path,
    profile: Option<&Path>,
    printer: Box<dyn PrintFacility>,
) -> anyhow::Result<QuotationPad> {
    let q = Quotation::from_path(quotation)
        .with_context(|| format!("loading quotation {}", quotation.display()))?;
    Ok(QuotationPad::new(q, printer).with_profile(load_profile(profile)?))
}

/// Deliver the print-mode document and report the outcome. The library's
/// facilities are fire-and-forget, so the CLI calls the fallible halves
/// directly to get a proper exit status.
fn deliver(backend: Backend, out: &Path, document: &RenderedDocument) -> anyhow::Result<()> {
    match backend {
        Backend::File => FilePrinter::new(out).write(document)?,
        #[cfg(feature = "cdp")]
        Backend::Cdp => {
            let pdf = quotepad::CdpPrinter::launch(out)?.print_pdf(document)?;
            std::fs::write(out, pdf).with_context(|| format!("writing {}", out.display()))?;
        }
        #[cfg(not(feature = "cdp"))]
        Backend::Cdp => anyhow::bail!("quotepad was built without the `cdp` feature"),
    }
    log::info!("Print output written to {}", out.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            quotation,
            mode,
            profile,
            out,
            text,
        } => {
            let pad = load_pad(&quotation, profile.as_deref(), Box::new(NoopPrinter))?;
            let document = pad.render(mode.into());
            let output = if text {
                let snap = text_snapshot(&document);
                format!("{}\n\n{}\n", snap.title, snap.text)
            } else {
                document.into_string()
            };
            match out {
                Some(path) => std::fs::write(&path, output)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => std::io::stdout().write_all(output.as_bytes())?,
            }
        }
        Command::Print {
            quotation,
            profile,
            out,
            backend,
        } => {
            let pad = load_pad(&quotation, profile.as_deref(), Box::new(NoopPrinter))?;
            let document = pad.render(RenderMode::Print);
            deliver(backend, &out, &document)
                .with_context(|| format!("printing quotation {}", pad.quotation().reference_number))?;
        }
    }
    Ok(())
}
