// File: crates/demo/src/main.rs
// Summary: Demo loads pre-binned data/MC histograms from CSV and renders a CMS-style figure to PNG.

use anyhow::{Context, Result};
use clap::Parser;
use pubstyle_core::style;
use pubstyle_core::{
    Alignment, CmsCanvas, CmsCanvasOptions, CmsSession, Decorations, DrawingSurface, HAlign, Position,
    TextStyle, VAlign,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// One histogram bin as read from the input file.
#[derive(Clone, Copy, Debug)]
struct Bin {
    low: f64,
    high: f64,
    data: f64,
    mc: f64,
    data_err: Option<f64>,
}

const DEFAULT_INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/zee_mass.csv");

/// Render pre-binned data and simulation histograms as a CMS-style figure.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV with `low,high,data,mc[,data_err]` columns
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output PNG (defaults to target/out/<stem>_cms.png)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// JSON file with the full decoration configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CMS label position: left, center, right or outside
    #[arg(long, default_value = "outside", conflicts_with = "config")]
    position: Position,

    /// Sublabel text next to or below the CMS label
    #[arg(long, default_value = "Preliminary", conflicts_with = "config")]
    extra: String,

    /// Luminosity label text
    #[arg(long, default_value = "18.3 fb^{-1} (8 TeV) + 4.8 fb^{-1} (7 TeV)", conflicts_with = "config")]
    lumi: String,

    /// X axis title
    #[arg(long, default_value = "m_{e^{+}e^{-}} (GeV)")]
    x_title: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    tracing::info!(input = %args.input.display(), "using input file");

    let bins = load_bins_csv(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    if bins.is_empty() {
        anyhow::bail!("no bins loaded; check headers/delimiter.");
    }
    tracing::info!(bins = bins.len(), "loaded histogram");

    let decorations = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Decorations::from_json(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => Decorations::new(args.lumi.clone(), args.position, args.extra.clone()),
    };

    let mut canvas = CmsCanvas::new(&CmsCanvasOptions::default())?;
    {
        let mut session = canvas.enter();
        draw_histograms(&mut session, &bins);
        draw_legend(&mut session);
        draw_x_title(&mut session, &args.x_title);
        session.decorate_with(&decorations);
        session.draw_frame();
    }

    let out = args.out.clone().unwrap_or_else(|| out_name(&args.input));
    canvas.canvas_mut().save_png(&out)?;
    tracing::info!(out = %out.display(), "done");
    Ok(())
}

/// Produce output file name like target/out/<stem>_cms.png
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("figure");
    PathBuf::from("target/out").join(format!("{stem}_cms.png"))
}

/// Load `low,high,data,mc[,data_err]` rows.
fn load_bins_csv(path: &Path) -> Result<Vec<Bin>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |name: &str| headers.iter().position(|h| h == name);
    let column = |name: &str| idx(name).with_context(|| format!("missing column '{name}'"));
    let (i_low, i_high, i_data, i_mc) = (column("low")?, column("high")?, column("data")?, column("mc")?);
    let i_err = idx("data_err");

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| -> Result<f64> {
            let s = rec.get(i).unwrap_or_default();
            s.parse::<f64>().with_context(|| format!("row {}: bad number '{s}'", row + 1))
        };
        out.push(Bin {
            low: parse(i_low)?,
            high: parse(i_high)?,
            data: parse(i_data)?,
            mc: parse(i_mc)?,
            data_err: i_err.map(parse).transpose()?,
        });
    }
    Ok(out)
}

fn draw_histograms(session: &mut CmsSession<'_>, bins: &[Bin]) {
    let st = style::current();
    let x_min = bins.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
    let x_max = bins.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    let y_max = bins
        .iter()
        .map(|b| (b.data + b.data_err.unwrap_or(0.0)).max(b.mc))
        .fold(0.0_f64, f64::max)
        * 1.3;
    let x_span = (x_max - x_min).max(1e-9);
    let y_span = y_max.max(1e-9);
    let fx = |x: f64| (x - x_min) / x_span;
    let fy = |y: f64| (y / y_span).clamp(0.0, 1.0);

    // Simulation: filled bars plus step outline.
    let mut outline = Vec::with_capacity(bins.len() * 2 + 2);
    outline.push(session.frame_to_ndc(fx(bins[0].low), 0.0));
    for b in bins {
        let (x0, y0) = session.frame_to_ndc(fx(b.low), 0.0);
        let (x1, y1) = session.frame_to_ndc(fx(b.high), fy(b.mc));
        session.fill_rect_ndc(x0, y0, x1, y1, st.hist_fill);
        outline.push((x0, y1));
        outline.push((x1, y1));
    }
    outline.push(session.frame_to_ndc(fx(bins[bins.len() - 1].high), 0.0));
    session.stroke_polyline_ndc(&outline, st.hist_line, st.hist_line_width);

    // Data: markers with vertical error bars.
    for b in bins {
        let xc = fx(0.5 * (b.low + b.high));
        if let Some(err) = b.data_err {
            let lo = session.frame_to_ndc(xc, fy(b.data - err));
            let hi = session.frame_to_ndc(xc, fy(b.data + err));
            session.stroke_polyline_ndc(&[lo, hi], st.marker, 1.0);
        }
        let (x, y) = session.frame_to_ndc(xc, fy(b.data));
        session.draw_marker_ndc(x, y);
    }
}

fn draw_legend(session: &mut CmsSession<'_>) {
    let st = style::current();
    let text = TextStyle {
        font: 42,
        size: 0.04,
        align: Alignment::new(HAlign::Left, VAlign::Center),
    };

    let (mx, my) = session.frame_to_ndc(0.66, 0.80);
    session.draw_marker_ndc(mx, my);
    session.draw_text_ndc(mx + 0.03, my, "Data", &text);

    let (bx, by) = session.frame_to_ndc(0.66, 0.72);
    session.fill_rect_ndc(bx - 0.012, by - 0.015, bx + 0.012, by + 0.015, st.hist_fill);
    session.stroke_polyline_ndc(
        &[
            (bx - 0.012, by - 0.015),
            (bx + 0.012, by - 0.015),
            (bx + 0.012, by + 0.015),
            (bx - 0.012, by + 0.015),
            (bx - 0.012, by - 0.015),
        ],
        st.hist_line,
        st.hist_line_width,
    );
    session.draw_text_ndc(bx + 0.03, by, "Z#rightarrow ee (MC)", &text);
}

fn draw_x_title(session: &mut CmsSession<'_>, title: &str) {
    let st = style::current();
    let m = session.margins();
    let style = TextStyle {
        font: st.title_font,
        size: st.title_size,
        align: Alignment::new(HAlign::Right, VAlign::Top),
    };
    session.draw_text_ndc(1.0 - m.right, m.bottom - 0.02, title, &style);
}
