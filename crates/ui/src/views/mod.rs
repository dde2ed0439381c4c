mod lesson;

pub use lesson::LessonView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
