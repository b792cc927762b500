#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Start the program
    let action = electroverse::cli::start()?;

    // Handle the action
    action.execute().await?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    electroverse::web::mount();
}
