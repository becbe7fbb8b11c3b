pub trait GetRobotsUseCase: Send + Sync {
    fn execute(&self) -> String;
}
