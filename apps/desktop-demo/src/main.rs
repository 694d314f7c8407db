mod scenario;

use floatchat_auth::{
    reset_link, AuthSession, FakeAuthApi, MemoryStorage, SystemWallClock, DEMO_EMAIL,
    DEMO_PASSWORD,
};
use floatchat_core::Size;
use floatchat_runtime_std::StdRuntime;
use floatchat_ui::{ChatWidget, WidgetConfig};
use scenario::Scenario;
use std::rc::Rc;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== floatchat headless demo ===");
    println!("Scripted gestures against the floating chat button:");
    println!("  - tap to open the panel and chat with the bot");
    println!("  - slow drag, whose trailing click is suppressed");
    println!("  - throw with edge bounces until the widget rests");
    println!("  - viewport shrink pulling the widget back inside");
    println!();
    println!("Set RUST_LOG=debug (or trace for every inertia frame) for more detail.");
    println!();

    let storage = Rc::new(MemoryStorage::new());
    let api = FakeAuthApi::new(storage.clone(), Rc::new(SystemWallClock))?;
    let mut session = AuthSession::new(api, storage);

    let token = session.api().request_password_reset(DEMO_EMAIL)?;
    log::info!(
        "reset link for {DEMO_EMAIL}: {}",
        reset_link("http://localhost:5173", &token)
    );

    let user = session.login(DEMO_EMAIL, DEMO_PASSWORD)?;
    log::info!("logged in as {}", user.email);

    let runtime = StdRuntime::new();
    let widget = ChatWidget::mount(
        &runtime.runtime_handle(),
        &session,
        Size::new(1280.0, 800.0),
        WidgetConfig::default(),
    )
    .ok_or_else(|| anyhow::anyhow!("chat widget needs a signed-in user"))?;

    let mut scenario = Scenario::new(runtime, widget);
    scenario.run();
    Ok(())
}
