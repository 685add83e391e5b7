//! career-tools: resume, skills-gap and salary scoring from the command line

use anyhow::{anyhow, Context};
use career_tools::cli::{self, Cli, Commands, ConfigAction, OutputArgs, SalaryArgs, TextSource};
use career_tools::config::Config;
use career_tools::input::file_detector::FileType;
use career_tools::input::InputManager;
use career_tools::output::formatter::{save_report_to_file, ReportGenerator};
use career_tools::output::report::Report;
use career_tools::salary::SalaryCalculator;
use career_tools::{AnalysisEngine, ExperienceLevel, Location, Role, Taxonomy};
use clap::Parser;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("reading config file {}", path.display())),
        None => Ok(Config::load()?),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    match command {
        Commands::Analyze { source, output } => {
            let (text, source_label) = read_source(&source).await?;

            let engine = match &config.analysis.taxonomy_path {
                Some(_) => AnalysisEngine::with_taxonomy(config.resume_taxonomy()?)?,
                None => AnalysisEngine::resume()?,
            };

            info!("Analyzing {} ({} characters)", source_label, text.len());
            let result = engine.analyze(&text);
            emit(Report::analysis(engine.kind().clone(), result, source_label), &output, &config)?;
        }

        Commands::SkillsGap { role, source, output } => {
            let role: Role = role.parse()?;
            let (text, source_label) = read_source(&source).await?;

            let engine = AnalysisEngine::skills_gap(role)?;
            info!("Checking {} against {} skills", source_label, role);
            let result = engine.analyze(&text);
            emit(Report::analysis(engine.kind().clone(), result, source_label), &output, &config)?;
        }

        Commands::Salary { salary, output } => {
            let (role, level, location) = parse_salary_args(&salary, &config)?;

            let result = SalaryCalculator::default().calculate_salary(role, level, location, &salary.skills);
            emit(Report::salary(result), &output, &config)?;
        }

        Commands::CompareCities { salary, output } => {
            let (role, level, current) = parse_salary_args(&salary, &config)?;

            let comparisons =
                SalaryCalculator::default().compare_cities(role, level, &salary.skills, current);
            let report = Report::city_comparison(role, level, current, salary.skills, comparisons);
            emit(report, &output, &config)?;
        }

        Commands::Taxonomy { role } => {
            let taxonomy = match role {
                Some(role) => Taxonomy::for_role(role.parse()?),
                None => config.resume_taxonomy()?,
            };

            for category in taxonomy.categories() {
                println!(
                    "{} (weight {:.1}, max {:.1})",
                    category.name,
                    category.weight,
                    category.max_score()
                );
                println!("  {}", category.keywords.join(", "));
            }
            println!(
                "\n{} categories, {} keywords, max score {:.1}",
                taxonomy.categories().len(),
                taxonomy.keyword_count(),
                taxonomy.max_score()
            );
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config)
                        .context("serializing configuration")?;
                    println!("# {}\n{}", path.display(), content);
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset: {}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Resume text plus a label describing where it came from.
async fn read_source(source: &TextSource) -> anyhow::Result<(String, String)> {
    match (&source.file, &source.text) {
        (Some(path), _) => {
            cli::validate_file_extension(path, &FileType::SUPPORTED_EXTENSIONS)
                .map_err(|e| anyhow!("Resume file: {}", e))?;

            let text = InputManager::new()
                .extract_text(path)
                .await
                .with_context(|| format!("extracting text from {}", path.display()))?;
            Ok((text, path.display().to_string()))
        }
        (None, Some(text)) => Ok((text.clone(), "inline text".to_string())),
        (None, None) => Err(anyhow!("either --file or --text is required")),
    }
}

fn parse_salary_args(args: &SalaryArgs, config: &Config) -> anyhow::Result<(Role, ExperienceLevel, Location)> {
    let role = args.role.parse()?;
    let level = args.experience.parse()?;
    let location = match &args.location {
        Some(location) => location.parse()?,
        None => config
            .default_location()
            .context("invalid salary.default_location in configuration")?,
    };
    Ok((role, level, location))
}

fn emit(report: Report, args: &OutputArgs, config: &Config) -> anyhow::Result<()> {
    let format = match &args.output {
        Some(format) => cli::parse_output_format(format).map_err(|e| anyhow!(e))?,
        None => config.output.format,
    };

    let use_colors = config.output.color_output && args.save.is_none();
    let detailed = args.detailed || config.output.detailed;
    let generator = ReportGenerator::with_options(use_colors, detailed, true, true);
    let content = generator.generate_report(&report, &format)?;

    match &args.save {
        Some(path) => {
            save_report_to_file(&content, path)?;
            info!("Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}
