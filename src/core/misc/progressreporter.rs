use indicatif::*;

pub struct ProgressReporter {
    pb: ProgressBar,
}

impl ProgressReporter {
    pub fn new(total_work: usize, title: &str) -> Self {
        let pb = ProgressBar::new(total_work as u64);
        let template = format!("{{spinner:.bold.green}} {}: ", title)
            + "[{wide_bar:.cyan}]  ({pos}/{len}|{eta_precise}) ";
        pb.set_style(
            ProgressStyle::with_template(&template)
                .unwrap()
                .progress_chars("█▇▆▅▄▃▂▁  "),
        );
        pb.tick();
        ProgressReporter { pb }
    }

    pub fn update(&mut self, num: usize) {
        if num != 0 {
            self.pb.inc(num as u64);
        }
    }

    pub fn done(&mut self) {
        self.pb.finish();
    }
}
