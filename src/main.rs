use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use navrender::*;

fn common_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("tree")
                .help("JSON file holding the page tree")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Options file (defaults to <config dir>/navrender/options.json)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("active-uri")
                .long("active-uri")
                .help("Mark the page with this uri as the only active page"),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .help("Indent every line by this many columns")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("min-depth")
                .long("min-depth")
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("no-escape")
                .long("no-escape")
                .help("Do not escape labels")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("partial")
                .long("partial")
                .help("Render through this template instead of the built-in markup")
                .requires("templates"),
        )
        .arg(
            Arg::new("templates")
                .long("templates")
                .help("Glob of Tera templates, e.g. 'templates/**/*.html'"),
        )
}

fn cli() -> Command {
    Command::new("navrender")
        .about("Render a navigation page tree as Bootstrap menu or breadcrumb markup")
        .subcommand_required(true)
        .subcommand(
            common_args(Command::new("menu").about("Render a nav menu"))
                .arg(
                    Arg::new("only-active-branch")
                        .long("only-active-branch")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-render-parents")
                        .long("no-render-parents")
                        .help("With --only-active-branch, render only the deepest active level")
                        .action(ArgAction::SetTrue),
                )
                .arg(Arg::new("ul-class").long("ul-class"))
                .arg(
                    Arg::new("add-class-to-list-item")
                        .long("add-class-to-list-item")
                        .action(ArgAction::SetTrue),
                )
                .arg(Arg::new("tabs").long("tabs").action(ArgAction::SetTrue))
                .arg(Arg::new("pills").long("pills").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("vertical")
                        .long("vertical")
                        .help("Stack vertically, optionally up to a breakpoint (sm, md, lg, xl, xxl)")
                        .num_args(0..=1)
                        .default_missing_value("true"),
                ),
        )
        .subcommand(
            common_args(Command::new("breadcrumbs").about("Render a breadcrumb trail"))
                .arg(Arg::new("separator").long("separator"))
                .arg(
                    Arg::new("link-last")
                        .long("link-last")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn load_container(matches: &ArgMatches) -> Result<Container> {
    let path = matches
        .get_one::<PathBuf>("tree")
        .context("missing page tree argument")?;
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read page tree {}", path.display()))?;
    let mut container = Container::from_json(&json)
        .with_context(|| format!("failed to parse page tree {}", path.display()))?;
    if let Some(uri) = matches.get_one::<String>("active-uri") {
        if container.activate_uri(uri).is_none() {
            tracing::warn!(uri = %uri, "no page matches the active uri");
        }
    }
    debug!(pages = container.len(), "loaded page tree");
    Ok(container)
}

fn load_partials(matches: &ArgMatches) -> Result<Option<TeraPartials>> {
    match matches.get_one::<String>("templates") {
        Some(glob) => Ok(Some(
            TeraPartials::from_glob(glob).context("failed to load templates")?,
        )),
        None => Ok(None),
    }
}

fn menu_overrides(matches: &ArgMatches) -> MenuOverrides {
    let mut overrides = MenuOverrides::new();
    if let Some(indent) = matches.get_one::<usize>("indent") {
        overrides = overrides.indent(*indent);
    }
    if let Some(min_depth) = matches.get_one::<i64>("min-depth") {
        overrides = overrides.min_depth(Some(*min_depth));
    }
    if let Some(max_depth) = matches.get_one::<usize>("max-depth") {
        overrides = overrides.max_depth(Some(*max_depth));
    }
    if let Some(ul_class) = matches.get_one::<String>("ul-class") {
        overrides = overrides.ul_class(ul_class.as_str());
    }
    if matches.get_flag("only-active-branch") {
        overrides = overrides.only_active_branch(true);
    }
    if matches.get_flag("no-render-parents") {
        overrides = overrides.render_parents(false);
    }
    if matches.get_flag("add-class-to-list-item") {
        overrides = overrides.add_class_to_list_item(true);
    }
    if matches.get_flag("no-escape") {
        overrides = overrides.escape_labels(false);
    }
    if matches.get_flag("tabs") {
        overrides = overrides.tabs(true);
    }
    if matches.get_flag("pills") {
        overrides = overrides.pills(true);
    }
    if let Some(vertical) = matches.get_one::<String>("vertical") {
        overrides = overrides.vertical(match vertical.as_str() {
            "true" => Vertical::Toggle(true),
            token => Vertical::Breakpoint(token.to_string()),
        });
    }
    overrides
}

fn breadcrumb_overrides(matches: &ArgMatches) -> BreadcrumbOverrides {
    let mut overrides = BreadcrumbOverrides::new();
    if let Some(indent) = matches.get_one::<usize>("indent") {
        overrides = overrides.indent(*indent);
    }
    if let Some(min_depth) = matches.get_one::<i64>("min-depth") {
        overrides = overrides.min_depth(Some(*min_depth));
    }
    if let Some(max_depth) = matches.get_one::<usize>("max-depth") {
        overrides = overrides.max_depth(Some(*max_depth));
    }
    if let Some(separator) = matches.get_one::<String>("separator") {
        overrides = overrides.separator(separator.as_str());
    }
    if matches.get_flag("link-last") {
        overrides = overrides.link_last(true);
    }
    if matches.get_flag("no-escape") {
        overrides = overrides.escape_labels(false);
    }
    overrides
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let (name, sub) = matches.subcommand().context("missing subcommand")?;

    let config = NavigationConfig::discover(sub.get_one::<PathBuf>("config").map(PathBuf::as_path))
        .context("failed to load options")?;
    let mut container = load_container(sub)?;
    let partials = load_partials(sub)?;
    let partial = sub.get_one::<String>("partial").map(|name| Partial::from(name.as_str()));

    let escaper = HtmlEscaper;
    let labels = AnchorRenderer::new(&escaper);
    let filter = VisibilityFilter::new();
    let mut nav = Navigation::new(&filter, &labels, &escaper);
    if let Some(partials) = &partials {
        nav = nav.with_partials(partials);
    }

    let output = match name {
        "menu" => {
            let mut menu = Menu::new(nav).with_options(config.menu);
            let source = ContainerSource::Instance(&mut container);
            match &partial {
                Some(partial) => menu.render_partial(source, Some(partial))?,
                None => menu.render_menu(source, &menu_overrides(sub))?,
            }
        }
        "breadcrumbs" => {
            let mut breadcrumbs = Breadcrumbs::new(nav).with_options(config.breadcrumbs);
            let source = ContainerSource::Instance(&mut container);
            match &partial {
                Some(partial) => breadcrumbs.render_partial(source, Some(partial))?,
                None => breadcrumbs.render_straight(source, &breadcrumb_overrides(sub))?,
            }
        }
        other => anyhow::bail!("unknown subcommand {}", other),
    };

    println!("{}", output);

    Ok(())
}
