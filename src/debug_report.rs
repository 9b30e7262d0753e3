use doctor::{ReplyFlags, ResponseVerbose};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_reply(res: &ResponseVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;

    println!("{}", palette.bold(palette.paint(&res.reply, ansi::GREEN)));
    println!("  {} {}", palette.dim("query:"), palette.paint(format!("\"{}\"", details.query), ansi::CYAN));

    if details.flags.contains(ReplyFlags::REPEAT) {
        println!("  {}", palette.paint("repeated input, rotation unchanged", ansi::YELLOW));
        print_footer(res, &palette);
        return;
    }

    let keyword = details.keyword.as_deref().unwrap_or("-");
    let at = details.match_offset.map_or_else(|| "no match".to_string(), |offset| format!("@{offset}"));
    println!(
        "  {} {} {} {}",
        palette.dim("rule:"),
        palette.paint(keyword, ansi::BLUE),
        palette.dim("│"),
        palette.paint(at, ansi::YELLOW),
    );

    if let Some(template) = &details.template {
        println!("  {} {}", palette.dim("template:"), template);
    }
    if !details.remainder.is_empty() {
        println!("  {} \"{}\"", palette.dim("remainder:"), details.remainder);
    }
    if let Some(conjugated) = &details.conjugated {
        println!("  {} \"{}\"", palette.dim("conjugated:"), conjugated);
    }
    if !details.flags.contains(ReplyFlags::OVERRIDE) {
        println!(
            "  {} {} → {} {}",
            palette.dim("rotation:"),
            details.rotation_before,
            palette.paint(details.rotation_after.to_string(), ansi::GREEN),
            palette.dim(format!("(+{} synced)", details.synced)),
        );
    }

    print_footer(res, &palette);
}

fn print_footer(res: &ResponseVerbose, palette: &ansi::Palette) {
    println!(
        "  {} {}  {} {}",
        palette.dim("flags:"),
        palette.paint(flag_names(res.details.flags), ansi::GRAY),
        palette.dim("│ took:"),
        palette.dim(format!("{:?}", res.elapsed)),
    );
}

fn flag_names(flags: ReplyFlags) -> String {
    if flags.is_empty() {
        return "-".to_string();
    }
    flags.iter_names().map(|(name, _)| name.to_ascii_lowercase()).collect::<Vec<_>>().join(",")
}
