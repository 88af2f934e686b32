use synchrotron::app::run;

fn main() -> color_eyre::Result<()> {
    run()
}
