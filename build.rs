fn main() -> Result<(), Box<dyn std::error::Error>> {
	let gitcl = vergen_gitcl::GitclBuilder::default().sha(true).build()?;
	let cargo = vergen_gitcl::CargoBuilder::default().target_triple(true).build()?;

	// The default emitter falls back to idempotent placeholder values when the
	// build does not run inside a git checkout.
	vergen_gitcl::Emitter::default()
		.add_instructions(&gitcl)?
		.add_instructions(&cargo)?
		.emit()?;

	Ok(())
}
