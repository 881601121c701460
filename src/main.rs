use noisecoder::config::TrainConfig;
use noisecoder::data::{load_split, Standardizer};
use noisecoder::util::simple_logger::{set_log_level, LogLevel};
use noisecoder::{error, info, training};

fn main() {
    set_log_level(LogLevel::Info);
    let cfg = TrainConfig::default();

    info!("loading mnist dataset");
    let split = load_split();
    let scaler = Standardizer::fit(&split.train);
    let x_train = scaler.transform(&split.train);
    let x_test = scaler.transform(&split.test);
    info!("{} train / {} test samples", x_train.rows, x_test.rows);

    match training::run(&cfg, &x_train) {
        Ok((mut model, _)) => match model.calc_total_cost(&x_test) {
            Ok(cost) => info!("total cost on test set: {cost:.1}"),
            Err(e) => error!("test evaluation failed: {e}"),
        },
        Err(e) => {
            error!("training failed: {e}");
            std::process::exit(1);
        }
    }
}
