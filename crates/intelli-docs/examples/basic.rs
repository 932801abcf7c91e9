use intelli_docs::{
    generators::json::render_json, render_intellisense, DocExtractor, ObjectGroupIndex,
    SignatureNormalizer,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = "\
## Vector
- `len = vec.length`number of elements
- `vec3 = vec.minus(vec2)`subtract two vectors
- `rec = store[recId]`indexed access, needs manual handling
";

    let records = DocExtractor::default().extract_records(source);
    let normalization = SignatureNormalizer::default().run(&records)?;
    let groups = ObjectGroupIndex::from_members(&normalization.members);

    println!("Stub body:\n{}", render_intellisense(&groups));
    println!("Problems:\n{}", normalization.problems.render());
    println!("Groups:\n{}", render_json(&groups)?);

    Ok(())
}
