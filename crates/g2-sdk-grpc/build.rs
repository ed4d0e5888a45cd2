fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto");
    // Server stubs are generated too; the integration tests run in-process
    // mock engines against them.
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(
            &[
                "proto/g2config.proto",
                "proto/g2configmgr.proto",
                "proto/g2engine.proto",
            ],
            &["proto"],
        )?;
    Ok(())
}
