use clap::{Parser, Subcommand};
use tetra_orbit::{Body, BodyCatalog};
use tetra_profile::{ELEMENT_CYCLE, ElementalProfile, Profiler, sign_from_longitude};
use tetra_time::{CalendarDate, ClockTime, calendar_to_jd};

#[derive(Parser)]
#[command(name = "tetra", about = "Elemental affinity profile CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Julian Day for a calendar date and time
    Jd {
        /// Proleptic-Gregorian year
        year: i32,
        /// Month (1-12)
        month: u32,
        /// Day of month (1-31)
        day: u32,
        /// Hour (0-23)
        #[arg(long, default_value = "12")]
        hour: u32,
        /// Minute (0-59)
        #[arg(long, default_value = "0")]
        minute: u32,
    },
    /// Ecliptic longitude of a tracked body
    Longitude {
        /// Body name: sun, moon, or mercury
        body: String,
        /// Julian Day
        #[arg(long)]
        jd: f64,
    },
    /// Zodiac sign and element for an ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// Four-element profile for a birth date
    Profile {
        /// Proleptic-Gregorian year
        year: i32,
        /// Month (1-12)
        month: u32,
        /// Day of month (1-31)
        day: u32,
        /// Hour (0-23)
        #[arg(long, default_value = "12")]
        hour: u32,
        /// Minute (0-59)
        #[arg(long, default_value = "0")]
        minute: u32,
    },
    /// Compare the profiles of two birth dates
    Compare {
        /// First subject's year
        year_a: i32,
        /// First subject's month (1-12)
        month_a: u32,
        /// First subject's day (1-31)
        day_a: u32,
        /// Second subject's year
        year_b: i32,
        /// Second subject's month (1-12)
        month_b: u32,
        /// Second subject's day (1-31)
        day_b: u32,
        /// First subject's hour (0-23)
        #[arg(long, default_value = "12")]
        hour_a: u32,
        /// First subject's minute (0-59)
        #[arg(long, default_value = "0")]
        minute_a: u32,
        /// Second subject's hour (0-23)
        #[arg(long, default_value = "12")]
        hour_b: u32,
        /// Second subject's minute (0-59)
        #[arg(long, default_value = "0")]
        minute_b: u32,
    },
}

fn parse_date(year: i32, month: u32, day: u32) -> CalendarDate {
    match CalendarDate::new(year, month, day) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_time(hour: u32, minute: u32) -> ClockTime {
    match ClockTime::new(hour, minute) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_body(name: &str) -> Body {
    match Body::from_name(name) {
        Some(b) => b,
        None => {
            eprintln!("error: unknown body: {name}");
            eprintln!("valid: sun, moon, mercury");
            std::process::exit(1);
        }
    }
}

fn print_profile(label: &str, profile: &ElementalProfile) {
    println!(
        "{label}: fire {} | earth {} | air {} | water {} (total {})",
        profile.fire,
        profile.earth,
        profile.air,
        profile.water,
        profile.total()
    );
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Jd {
            year,
            month,
            day,
            hour,
            minute,
        } => {
            let jd = calendar_to_jd(parse_date(year, month, day), parse_time(hour, minute));
            println!("{jd}");
        }

        Commands::Longitude { body, jd } => {
            let body = parse_body(&body);
            let lon = BodyCatalog::standard().longitude(body, jd);
            println!("{} at JD {jd}: {lon:.4} deg", body.name());
        }

        Commands::Sign { lon } => {
            let info = sign_from_longitude(lon);
            println!(
                "{} (index {}) - {:.4} deg in sign, element {}",
                info.sign.name(),
                info.sign_index,
                info.degrees_in_sign,
                info.sign.element().name()
            );
        }

        Commands::Profile {
            year,
            month,
            day,
            hour,
            minute,
        } => {
            let profile = Profiler::standard().compute(
                parse_date(year, month, day),
                parse_time(hour, minute),
            );
            print_profile("profile", &profile);
        }

        Commands::Compare {
            year_a,
            month_a,
            day_a,
            year_b,
            month_b,
            day_b,
            hour_a,
            minute_a,
            hour_b,
            minute_b,
        } => {
            let profiler = Profiler::standard();
            let a = profiler.compute(
                parse_date(year_a, month_a, day_a),
                parse_time(hour_a, minute_a),
            );
            let b = profiler.compute(
                parse_date(year_b, month_b, day_b),
                parse_time(hour_b, minute_b),
            );
            print_profile("subject a", &a);
            print_profile("subject b", &b);
            println!("scale: {}", a.max_component().max(b.max_component()));
            for element in ELEMENT_CYCLE {
                let (va, vb) = (a.of(element), b.of(element));
                println!(
                    "{:<5} delta: {:+}",
                    element.name(),
                    i64::from(va) - i64::from(vb)
                );
            }
        }
    }
}
