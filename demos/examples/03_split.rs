use tsprep_core::{Series, SplitConfig, split_data, split_series};
use tsprep_demos::common::{demo_series, init_tracing};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let f = demo_series();

    for gap in [0.5, 5.0, 50.0] {
        let segments = split_data(&f.times, gap)?;
        println!("gap > {gap:>5}: {} segment(s) {segments:?}", segments.len());
    }

    let series = Series::new(&f.times, &f.values)?;
    for (i, part) in split_series(&series, &SplitConfig { gap: 5.0 })?
        .iter()
        .enumerate()
    {
        let times = part.times();
        if let (Some(first), Some(last)) = (times.first(), times.last()) {
            println!(
                "segment {i}: {} points, t = {first:.2} .. {last:.2}",
                part.len()
            );
        }
    }

    Ok(())
}
