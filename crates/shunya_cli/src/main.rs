mod output;
mod report;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use shunya_ephem::{
    AyanamshaSystem, CATALOG, EngineConfig, Ephemeris, PrecessionEngine, SiderealMode,
};
use shunya_points::{
    COMMON_STARS, FailurePolicy, PointsConfig, SCAN_FROM_YEAR, SCAN_TO_YEAR, STAR_FIX_FROM_YEAR,
    STAR_FIX_TO_YEAR, annual_precession_arcsec, scan_presets, sort_by_zero_date,
    star_fixing_point, star_table, year_bracket,
};
use shunya_search::{DEFAULT_TOLERANCE_DAYS, SearchConfig, dms_to_deg};
use shunya_time::{Calendar, CalendarDate, J2000_JD};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use output::{print_json, print_table};
use report::{
    AYANAMSHA_HEADERS, AyanamshaRow, CATALOG_HEADERS, SCAN_HEADERS, STAR_HEADERS, ScanRow,
    StarFixReport, catalog_cells, star_position_cells,
};

/// Epoch of the ayanamsha table printed by `shunya ayanamsha`.
const TABLE_JD: f64 = 1_927_135.874_779_3;

#[derive(Parser)]
#[command(
    name = "shunya",
    about = "Zero points of sidereal zodiacs and star-fixed ayanamshas",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Bisection tolerance in days
    #[arg(long, global = true, env = "SHUNYA_TOLERANCE", default_value_t = DEFAULT_TOLERANCE_DAYS)]
    tolerance: f64,

    /// Keep bisecting when a sample is exactly zero
    #[arg(long, global = true)]
    no_zero_shortcut: bool,

    /// Treat engine failures at single epochs as 0 deg instead of aborting
    #[arg(long, global = true)]
    lenient: bool,

    /// Apply nutation in longitude (true equinox of date)
    #[arg(long, global = true)]
    nutation: bool,

    /// Read and print dates in the Julian calendar
    #[arg(long, global = true)]
    julian: bool,

    /// Log verbosity (-v debug, -vv trace); SHUNYA_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the zero point of every ayanamsha preset
    Scan {
        /// Number of presets to scan, in code order (default: all)
        #[arg(long)]
        count: Option<usize>,
        /// Only this preset (code or name)
        #[arg(long, value_parser = parse_system)]
        system: Option<AyanamshaSystem>,
        /// First year of the search window (astronomical numbering)
        #[arg(long, default_value_t = SCAN_FROM_YEAR, allow_hyphen_values = true)]
        from: i32,
        /// Last year of the search window
        #[arg(long, default_value_t = SCAN_TO_YEAR, allow_hyphen_values = true)]
        to: i32,
        /// Sort by zero date and add annual precession
        #[arg(long)]
        sorted: bool,
    },
    /// Find the epoch at which a star sits at a sidereal longitude
    FixStar {
        /// Star name, designation or nakshatra (e.g. Regulus, ",alVir", Citra)
        #[arg(default_value = "Regulus")]
        star: String,
        /// Sidereal longitude in degrees, decimal or D:M[:S]
        #[arg(default_value = "126:40", value_parser = parse_angle)]
        longitude: f64,
        /// First year of the search window
        #[arg(long, default_value_t = STAR_FIX_FROM_YEAR, allow_hyphen_values = true)]
        from: i32,
        /// Last year of the search window
        #[arg(long, default_value_t = STAR_FIX_TO_YEAR, allow_hyphen_values = true)]
        to: i32,
    },
    /// Ayanamsha of the presets at an epoch
    Ayanamsha {
        /// Julian day
        #[arg(long, default_value_t = TABLE_JD)]
        jd: f64,
        /// Only this preset (code or name)
        #[arg(long, value_parser = parse_system)]
        system: Option<AyanamshaSystem>,
    },
    /// List the star catalog, or star positions in a sidereal zodiac
    Stars {
        /// Sidereal zodiac for positions (code or name)
        #[arg(long, value_parser = parse_system)]
        system: Option<AyanamshaSystem>,
        /// Julian day for positions
        #[arg(long, default_value_t = J2000_JD)]
        jd: f64,
    },
    /// List the ayanamsha presets
    Systems,
    /// Julian day of a calendar date
    Jd {
        #[arg(allow_hyphen_values = true)]
        year: i32,
        month: u32,
        day: u32,
        /// Hours since midnight
        #[arg(long, default_value_t = 0.0)]
        hour: f64,
    },
    /// Calendar date of a Julian day
    Date {
        jd: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SHUNYA_LOG").unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let calendar = if cli.julian {
        Calendar::Julian
    } else {
        Calendar::Gregorian
    };
    let mut search = SearchConfig::new(cli.tolerance);
    if cli.no_zero_shortcut {
        search = search.without_zero_shortcut();
    }
    let policy = if cli.lenient {
        FailurePolicy::SubstituteZero
    } else {
        FailurePolicy::Abort
    };
    let config = PointsConfig::new(search, policy).with_calendar(calendar);
    config.validate().context("invalid search settings")?;
    debug!(?config, nutation = cli.nutation, "settings");
    let engine = PrecessionEngine::new(EngineConfig {
        nutation: cli.nutation,
        ..EngineConfig::default()
    })?;

    match cli.command {
        Commands::Scan {
            count,
            system,
            from,
            to,
            sorted,
        } => {
            let systems: Vec<AyanamshaSystem> = match system {
                Some(s) => vec![s],
                None => {
                    let all = AyanamshaSystem::all();
                    all[..count.unwrap_or(all.len()).min(all.len())].to_vec()
                }
            };
            let bracket = year_bracket(from, to, 0.0)
                .with_context(|| format!("bad search window {from}..{to}"))?;
            let mut zeros = scan_presets(&engine, &systems, bracket, &config);
            if sorted {
                sort_by_zero_date(&mut zeros);
            }
            let rows = zeros
                .iter()
                .map(|z| -> anyhow::Result<ScanRow> {
                    let precession = if sorted {
                        Some(annual_precession_arcsec(
                            &engine,
                            &SiderealMode::Preset(z.system),
                            J2000_JD,
                        )?)
                    } else {
                        None
                    };
                    Ok(ScanRow::new(z, precession))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;

            if cli.json {
                print_json(&rows)?;
            } else if sorted {
                let cells: Vec<Vec<String>> = rows.iter().map(ScanRow::cells).collect();
                print_table(&SCAN_HEADERS, &cells);
            } else {
                for (i, row) in rows.iter().enumerate() {
                    println!("{}", row.line(i));
                }
            }
            let failed = rows.iter().filter(|r| r.error.is_some()).count();
            if failed > 0 {
                bail!("{failed} of {} presets failed", rows.len());
            }
        }

        Commands::FixStar {
            star,
            longitude,
            from,
            to,
        } => {
            let bracket = year_bracket(from, to, 12.0)
                .with_context(|| format!("bad search window {from}..{to}"))?;
            let fix = star_fixing_point(&engine, &star, longitude, bracket, &config)
                .with_context(|| format!("fixing '{star}' at {longitude}"))?;
            let stars = star_table(&engine, &COMMON_STARS, fix.jd, &fix.mode())?;
            let report = StarFixReport { fix, stars };
            if cli.json {
                print_json(&report)?;
            } else {
                println!("{}", report.headline());
                let cells: Vec<Vec<String>> =
                    report.stars.iter().map(star_position_cells).collect();
                print_table(&STAR_HEADERS, &cells);
            }
        }

        Commands::Ayanamsha { jd, system } => {
            let systems = match system {
                Some(s) => vec![s],
                None => AyanamshaSystem::all().to_vec(),
            };
            let rows = systems
                .into_iter()
                .map(|s| -> anyhow::Result<AyanamshaRow> {
                    Ok(AyanamshaRow {
                        code: s.code(),
                        system: s,
                        name: s.name(),
                        ayanamsha_deg: engine.ayanamsha_deg(&SiderealMode::Preset(s), jd)?,
                    })
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            if cli.json {
                print_json(&rows)?;
            } else {
                println!("ayanamsha at jd {jd:.7} = [{}]", CalendarDate::from_jd(jd, calendar)?);
                let cells: Vec<Vec<String>> = rows.iter().map(AyanamshaRow::cells).collect();
                print_table(&AYANAMSHA_HEADERS, &cells);
            }
        }

        Commands::Stars { system, jd } => match system {
            Some(s) => {
                let names: Vec<&str> = CATALOG.iter().map(|s| s.name).collect();
                let positions = star_table(&engine, &names, jd, &SiderealMode::Preset(s))?;
                if cli.json {
                    print_json(&positions)?;
                } else {
                    println!("{} at jd {jd:.6}", s.name());
                    let cells: Vec<Vec<String>> =
                        positions.iter().map(star_position_cells).collect();
                    print_table(&STAR_HEADERS, &cells);
                }
            }
            None => {
                if cli.json {
                    print_json(&CATALOG)?;
                } else {
                    let cells: Vec<Vec<String>> = CATALOG.iter().map(catalog_cells).collect();
                    print_table(&CATALOG_HEADERS, &cells);
                }
            }
        },

        Commands::Systems => {
            if cli.json {
                print_json(&AyanamshaSystem::all())?;
            } else {
                for s in AyanamshaSystem::all() {
                    println!("{:2}  {}", s.code(), s.name());
                }
            }
        }

        Commands::Jd {
            year,
            month,
            day,
            hour,
        } => {
            let date = CalendarDate::new(year, month, day, hour, calendar)?;
            let jd = date.to_jd();
            if cli.json {
                print_json(&serde_json::json!({ "date": date, "jd": jd }))?;
            } else {
                println!("{jd:.7}");
            }
        }

        Commands::Date { jd } => {
            let date = CalendarDate::from_jd(jd, calendar)?;
            if cli.json {
                print_json(&date)?;
            } else {
                println!("{date}");
            }
        }
    }
    Ok(())
}

/// Preset by numeric code or by name.
fn parse_system(s: &str) -> Result<AyanamshaSystem, String> {
    let found = match s.parse::<u8>() {
        Ok(code) => AyanamshaSystem::from_code(code),
        Err(_) => AyanamshaSystem::from_name(s),
    };
    found.ok_or_else(|| format!("unknown ayanamsha '{s}' (see `shunya systems`)"))
}

/// Decimal degrees, or `D:M` / `D:M:S` with an optional leading minus.
fn parse_angle(s: &str) -> Result<f64, String> {
    let s = s.trim();
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let parts = body
        .split(':')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|e| format!("bad angle '{s}': {e}"))?;
    let deg = match parts.as_slice() {
        [d] => *d,
        [d, m] => dms_to_deg(*d, *m, 0.0),
        [d, m, sec] => dms_to_deg(*d, *m, *sec),
        _ => return Err(format!("bad angle '{s}': expected D, D:M or D:M:S")),
    };
    if !deg.is_finite() {
        return Err(format!("bad angle '{s}': not finite"));
    }
    Ok(if negative { -deg } else { deg })
}
