use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = neuro_api::Args::parse();
	neuro_api::run(args).await
}
