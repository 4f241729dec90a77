use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task;

use attest_term::application::cli;
use attest_term::application::ui;
use attest_term::configuration::Config;
use attest_term::configuration::ConfigKey;
use attest_term::domain::models::Action;
use attest_term::domain::models::Event;
use attest_term::domain::models::ExecutorName;
use attest_term::domain::services::RunnerService;
use attest_term::infrastructure::clients::ExecutorManager;
use attest_term::infrastructure::display::AnsiDisplay;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli::build().get_matches();

    if matches.subcommand_matches("config").is_some() {
        println!("{}", Config::serialize_default(cli::build()));
        return Ok(());
    }

    Config::load(cli::build(), vec![&matches]).await?;
    let _guard = cli::setup_tracing()?;

    std::panic::set_hook(Box::new(|panic_info| {
        ui::destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let executor_name = ExecutorName::parse(&Config::get(ConfigKey::Executor))
        .unwrap_or(ExecutorName::ShellService);
    let executor = ExecutorManager::get(executor_name)?;

    // A dead shell service is not fatal; the session starts with a notice
    // and every submission reports the transport failure instead.
    let mut startup_notice = None;
    if let Err(err) = executor.health_check().await {
        tracing::warn!(error = ?err, "executor health check failed");
        startup_notice = Some(format!(
            "{err}. Commands will fail until the service is back."
        ));
    }

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut background_futures = task::JoinSet::new();
    background_futures
        .spawn(async move { RunnerService::start(executor, event_tx, &mut action_rx).await });

    ui::setup_terminal()?;
    let mut display = AnsiDisplay::new();

    let result = tokio::select!(
        res = background_futures.join_next() => res.unwrap().unwrap(),
        res = ui::start_loop(&mut display, startup_notice, action_tx, event_rx) => res,
    );

    ui::restore_terminal()?;
    if result.is_err() {
        ui::destruct_terminal_for_panic();
    }

    return result;
}
