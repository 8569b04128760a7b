use bobtiler_core::{BobTilerResult, Config, Direction, LayoutTree, Metadata};
use log::{debug, error, info};

mod cli;
mod logger;

fn main() -> BobTilerResult<()> {
    let args = cli::parse_args();

    if let Err(e) = logger::init_logger(args.quiet, args.verbose) {
        eprintln!("Failed to initialize logger: {e}");
    }

    let mut config = if args.use_defaults {
        Config::default()
    } else {
        Config::load(args.config_path.as_deref(), true).map_err(|e| {
            error!("{e}");
            e.to_string()
        })?
    };

    if let Some(format) = args.format {
        config.dump_format = format.into();
    }

    if args.dry_run {
        info!("Configuration is valid");
        return Ok(());
    }

    Config::set_config(config);

    let tree = build_tree(args.windows, Config::default_direction())?;
    debug!("Layout:\n{}", tree.debug_layout());

    println!("{}", tree.dump(Config::dump_format())?);
    Ok(())
}

/// Builds a tree of `windows + 1` windows, each one splitting the previous in
/// alternating directions.
fn build_tree(windows: usize, direction: Direction) -> BobTilerResult<LayoutTree> {
    let mut tree = LayoutTree::new(Metadata::new(Config::root_name(), 1));

    let mut parent = tree.root_id();
    let mut direction = direction;
    for index in 0..windows {
        let number = index as i64 + 2;
        let attrs = Metadata::new(format!("Tab {number}"), number);
        parent = tree.add_window(parent, direction, attrs)?;
        direction = direction.opposite();
    }

    info!("Built layout with {} containers", tree.len());
    Ok(tree)
}
