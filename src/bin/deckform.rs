use std::path::PathBuf;

use clap::{Parser, Subcommand};

use deckform::{
    Align, BULLET_MARKER, Canvas, DeckBuilder, DeckRenderer as _, DeckResult, FlowChainSpec,
    JsonRenderer, Point, Rect, Size, Slide, SlideCtx, TableSpec, TextStyle, Theme, bulleted_list,
    callout, code_block, filled_rect, flow_chain, separator, table, text_box, title_bar,
};

#[derive(Parser, Debug)]
#[command(name = "deckform", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the demonstration deck and write its shape tree as JSON.
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let theme = Theme::midnight();
    let deck = DeckBuilder::new(Canvas::WIDESCREEN, &theme)
        .slide(slide_cover)
        .slide(slide_section)
        .slide(slide_overview)
        .slide(slide_code)
        .slide(slide_pipeline)
        .build()?;
    JsonRenderer.render(&deck, &args.out)?;
    println!(
        "wrote {} ({} slides)",
        args.out.display(),
        deck.slides().len()
    );
    Ok(())
}

fn slide_cover(ctx: &SlideCtx) -> DeckResult<Slide> {
    let t = ctx.theme;
    let mut sl = ctx.slide();
    sl.push(filled_rect(
        Rect::new(0.0, 0.0, 0.35, ctx.canvas.height),
        t.primary,
    ));
    sl.push(text_box(
        Rect::new(0.7, 1.8, 12.9, 2.4),
        "Deckform — declarative slide composition",
        TextStyle::new(40.0, t.text).bold(),
        Align::Left,
    ));
    sl.push(separator(ctx.canvas, t, 4.1));
    sl.push(text_box(
        Rect::new(0.7, 4.35, 10.7, 4.9),
        "Shape trees from compact declarative input",
        TextStyle::new(17.0, t.primary),
        Align::Left,
    ));
    sl.push(text_box(
        Rect::new(0.7, 5.05, 12.7, 5.7),
        "How a fixed canvas, a shared palette, and a little layout algebra go a long way.",
        TextStyle::new(14.0, t.text_muted).italic(),
        Align::Left,
    ));
    Ok(sl)
}

fn slide_section(ctx: &SlideCtx) -> DeckResult<Slide> {
    let t = ctx.theme;
    let w = ctx.canvas.width;
    let mut sl = ctx.slide();
    sl.push(filled_rect(Rect::new(0.0, 2.6, w, 4.8), t.accent));
    sl.push(text_box(
        Rect::new(0.0, 1.9, w, 2.5),
        "PART 1",
        TextStyle::new(15.0, t.primary),
        Align::Center,
    ));
    sl.push(text_box(
        Rect::new(0.0, 2.65, w, 3.75),
        "The Layout Engine",
        TextStyle::new(44.0, t.text).bold(),
        Align::Center,
    ));
    sl.push(text_box(
        Rect::new(0.0, 3.85, w, 4.55),
        "Primitives, composites, and the deck builder",
        TextStyle::new(17.0, t.text_muted),
        Align::Center,
    ));
    Ok(sl)
}

fn slide_overview(ctx: &SlideCtx) -> DeckResult<Slide> {
    let t = ctx.theme;
    let mut sl = ctx.slide();
    sl.extend(title_bar(ctx.canvas, t, "Engine Overview", 26.0));
    sl.push(separator(ctx.canvas, t, 1.15));

    sl.push(text_box(
        Rect::new(0.5, 1.3, 6.4, 1.75),
        "What it does",
        TextStyle::new(16.0, t.primary).bold(),
        Align::Left,
    ));
    sl.push(bulleted_list(
        Rect::new(0.5, 1.8, 6.4, 4.8),
        &[
            "Slide procedures compose primitives onto a fixed canvas",
            "Composites derive cell and node rectangles from specs",
            "Background is always the bottom-most shape, by construction",
            "The first failing procedure aborts the whole build",
            "Same inputs, same deck: no hidden counters or clocks",
        ],
        TextStyle::new(14.0, t.text_muted),
        BULLET_MARKER,
    ));

    sl.push(text_box(
        Rect::new(7.1, 1.3, 12.9, 1.75),
        "Module map",
        TextStyle::new(16.0, t.primary).bold(),
        Align::Left,
    ));
    let modules = TableSpec::new(
        vec!["Module".into(), "Role".into()],
        vec![
            vec!["layout".into(), "offsets, stacking, stripe parity".into()],
            vec!["builders".into(), "primitives, table, flow, chrome".into()],
            vec!["deck".into(), "ordered, fail-fast assembly".into()],
            vec!["render".into(), "shape-tree hand-off".into()],
        ],
        vec![2.0, 3.8],
        0.6,
    );
    sl.extend(table(t, Point::new(7.1, 1.8), &modules)?);

    sl.extend(callout(
        Rect::new(0.5, 5.3, 12.8, 6.1),
        t,
        t.primary,
        "Everything above the canvas is data: a deck serializes to JSON and back unchanged.",
        TextStyle::new(13.0, t.text_muted).italic(),
    ));
    Ok(sl)
}

fn slide_code(ctx: &SlideCtx) -> DeckResult<Slide> {
    let t = ctx.theme;
    let mut sl = ctx.slide();
    sl.extend(title_bar(ctx.canvas, t, "Declaring a Table", 26.0));
    sl.push(separator(ctx.canvas, t, 1.15));

    sl.push(text_box(
        Rect::new(0.5, 1.3, 6.4, 1.7),
        "1. Spec",
        TextStyle::new(14.0, t.primary).bold(),
        Align::Left,
    ));
    sl.extend(code_block(
        Rect::new(0.5, 1.75, 6.4, 4.1),
        "let spec = TableSpec::new(\n    header, rows,\n    vec![1.9, 1.9, 8.6],  // column widths\n    0.5,                  // row height\n);",
        t,
    ));

    sl.push(text_box(
        Rect::new(7.1, 1.3, 12.9, 1.7),
        "2. Lowering",
        TextStyle::new(14.0, t.primary).bold(),
        Align::Left,
    ));
    sl.extend(code_block(
        Rect::new(7.1, 1.75, 12.9, 4.1),
        "// header cells, then rows, top to bottom:\n// 2 * m * (n + 1) shapes in paint order\nlet shapes = table(&theme, origin, &spec)?;\nslide.extend(shapes);",
        t,
    ));

    sl.push(text_box(
        Rect::new(0.5, 4.4, 12.9, 4.9),
        "Cell x positions come from one prefix-sum pass; stripe parity picks each row fill.",
        TextStyle::new(12.0, t.warning).italic(),
        Align::Left,
    ));
    Ok(sl)
}

fn slide_pipeline(ctx: &SlideCtx) -> DeckResult<Slide> {
    let t = ctx.theme;
    let mut sl = ctx.slide();
    sl.extend(title_bar(ctx.canvas, t, "From Procedures to Document", 26.0));
    sl.push(separator(ctx.canvas, t, 1.15));

    sl.push(text_box(
        Rect::new(0.5, 1.28, 12.8, 1.68),
        "Every deck takes the same path:",
        TextStyle::new(13.0, t.text_muted).italic(),
        Align::Left,
    ));
    let chain = FlowChainSpec::new(
        [
            "Slide procedures",
            "Composite builders",
            "Shape lists",
            "Deck",
            "Renderer",
        ],
        Point::new(0.4, 1.82),
        Size::new(2.2, 1.0),
        0.3,
        t.accent,
        t.text,
    )
    .fill_override(4, t.success);
    sl.extend(flow_chain(&chain)?);

    let roles = TableSpec::new(
        vec!["Stage".into(), "Guarantee".into()],
        vec![
            vec!["Procedures".into(), "run strictly in order".into()],
            vec!["Builders".into(), "validated declarative input".into()],
            vec!["Deck".into(), "all-or-nothing, immutable".into()],
            vec!["Renderer".into(), "invoked exactly once".into()],
        ],
        vec![2.4, 7.0],
        0.6,
    )
    .row_color(3, t.success);
    sl.extend(table(t, Point::new(0.5, 3.4), &roles)?);
    Ok(sl)
}
