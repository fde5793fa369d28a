use clap::Parser;
use nic_payroll::app::presenters::presenter_for;
use nic_payroll::utils::{logger, validation::Validate};
use nic_payroll::{CliConfig, FormSession, PayrollError, PayrollForm, Settings, TomlConfig};

fn load_settings(config: &CliConfig) -> Result<Settings, PayrollError> {
    config.validate()?;

    let settings = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            Settings::from_toml(&TomlConfig::from_file(path)?)?
        }
        None => Settings::default(),
    };

    Ok(settings.with_display_overrides(config.currency_symbol.clone(), config.decimals))
}

fn run(config: &CliConfig, settings: &Settings) -> Result<(), PayrollError> {
    let presenter = presenter_for(config.format, settings);

    let mut form = PayrollForm::new();
    form.set_name(config.name.clone().unwrap_or_default());
    form.set_salary(config.salary.clone().unwrap_or_default());

    if config.runs_interactive() {
        let stdin = std::io::stdin();
        let mut session = FormSession::new(settings, presenter, stdin.lock(), std::io::stdout())
            .with_form(form);
        return session.run();
    }

    let report = form.calculate(settings)?;
    println!("{}", presenter.render(report)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting nic-payroll");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let result = load_settings(&config).and_then(|settings| {
        tracing::debug!(
            inss_rate = settings.calculator.inss_rate(),
            brackets = settings.calculator.schedule().brackets().len(),
            "settings resolved"
        );
        run(&config, &settings)
    });

    if let Err(e) = result {
        tracing::error!(
            "❌ nic-payroll failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
