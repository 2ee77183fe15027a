//! Demo form: one control of every kind, and the values read back as
//! a table or a list. Install as a CGI script, or run from the
//! command line with `--query`/`--body` to see the page for a
//! submission.

use std::path::PathBuf;

use anyhow::Result;
use simpleweb::{cgi::{self, CgiInput, InputSource, StaticInput},
                config::PageConfig,
                html::Markup,
                output::link,
                page::{Align, Layout, ListKind, Page},
                time_guard,
                util::program_path};

#[derive(clap::Parser, Debug)]
/// Render the demo form. Without options, behaves as a CGI script.
struct Args {
    /// Simulate a submission with this query string
    #[clap(long)]
    query: Option<String>,

    /// Simulate a submission with this POST body
    #[clap(long)]
    body: Option<String>,

    /// Don't print the CGI response headers
    #[clap(long)]
    no_headers: bool,

    /// Path to derive form action and title from (default: this
    /// program)
    #[clap(long)]
    script: Option<PathBuf>,

    /// Report on stderr which submitted value each control got
    #[clap(long)]
    trace: bool,
}

fn bold(s: &str) -> Markup {
    Markup(format!("<b>{}</b>", simpleweb::html::html_escape(s)))
}

fn or_none(v: Option<usize>, names: &[&str]) -> String {
    match v.and_then(|i| names.get(i)) {
        Some(name) => name.to_string(),
        None => "[none]".into(),
    }
}

fn or_empty(s: &str) -> &str {
    if s.is_empty() { "[empty]" } else { s }
}

fn demo(page: &mut Page) {
    let align = Align::Css;

    page.header("Hello World from Rust!", 2);
    page.writeln(bold("Read input:"));
    page.paragraph();
    page.write_aligned("String: ", align);
    let s = page.read_string("", Layout::Inline);
    let clicked = page.read_button(" ► ", Layout::Line);
    page.write("Integer: ");
    let i = page.read_integer(0, Layout::Line);
    page.write("Double: ");
    let f = page.read_float(0., Layout::Line);
    page.write("Boolean: ");
    let b = page.read_bool(true, "boolean", Layout::Line);
    page.write("Option: ");
    let options = ["option 1", "option 2", "option 3"];
    let opt = page.read_option(None, &options, Layout::Line);
    page.write("Select: ");
    let items = ["item 1", "item 2", "item 3"];
    let sel = page.read_select(None, &items, Layout::Line);
    page.writeln("Text: ");
    let txt = page.read_memo("Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
                             Layout::Line);
    page.write_aligned("Output: ", align);
    let out = page.read_option(Some(0), &["table", "list"], Layout::Inline);
    page.writeln("");

    if !page.has_input() {
        return
    }
    page.paragraph();
    page.writeln(bold("Write output:"));
    let button = if clicked { "[clicked]" } else { "[not clicked]" };
    let rows = [
        ("Button", button.to_string()),
        ("String", or_empty(&s).to_string()),
        ("Integer", i.to_string()),
        ("Double", f.to_string()),
        ("Boolean", b.to_string()),
        ("Option", or_none(opt, &options)),
        ("Select", or_none(sel, &items)),
    ];
    if out == Some(0) {
        page.open_table(["Type", "Value"], None, None);
        for (k, v) in &rows {
            page.table_row([*k, v.as_str()]);
        }
        page.table_row(["Text", or_empty(&txt)]);
        page.close_table();
    } else {
        page.open_list(ListKind::Unordered, None, None);
        for (k, v) in &rows {
            page.list_item(format!("{k}: {v}"));
        }
        page.list_item(format!("Text: {}", if txt.is_empty() { "[empty]" } else { "" }));
        if !txt.is_empty() {
            page.block(txt.as_str());
        }
        page.close_list();
    }
    let source = link("https://github.com/", "here", true);
    page.writeln(Markup(format!("<p>Source code is {source}.")));
}

fn main() -> Result<()> {
    let args: Args = clap::Parser::parse();
    if args.trace {
        simpleweb::warn::trace_enabled_set(true);
    }
    let script = match &args.script {
        Some(p) => p.clone(),
        None => program_path()?,
    };
    let config = PageConfig::for_executable(&script)?.with_env_overrides()?;

    let (request, mobile) = if args.query.is_some() || args.body.is_some() {
        let mut input = StaticInput {
            query: args.query.clone(),
            body: args.body.clone(),
            user_agent: None,
        };
        (cgi::read_request(&mut input)?, false)
    } else {
        let mut input = CgiInput::from_env()?;
        let mobile = input.user_agent().map_or(false, cgi::is_mobile);
        (cgi::read_request(&mut input)?, mobile)
    };

    let closed = {
        time_guard!("webtest page");
        let mut page = Page::open(config, request);
        if mobile {
            page.write_css("body { font-size: 120%; }");
        }
        demo(&mut page);
        page.close()
    };

    let mut out = std::io::stdout().lock();
    if args.no_headers {
        use std::io::Write;
        out.write_all(closed.document.as_bytes())?;
        out.flush()?;
        Ok(())
    } else {
        cgi::respond(&closed.document, &mut out)
    }
}
