fn main() -> aif_ontology::Result<()> {
    aif_ontology::cli::main()
}
