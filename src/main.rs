use ballfield::options::DemoOptions;

fn main() {
    let options = match DemoOptions::try_parse_from(std::env::args_os()) {
        Ok(options) => options,
        Err(err) => err.exit(),
    };

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap();

    rt.block_on(async {
        ballfield::run_with(options).await;
    });
}
