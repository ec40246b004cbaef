use cfg_if::*;

cfg_if! {
    if #[cfg(feature = "rayon")] {
        use rayon::prelude::*;

        /// Applies `f` to every route on the rayon thread pool, keeping the input order
        pub fn map_routes<R, T, F>(routes: &[R], f: F) -> Vec<T>
            where R: Sync, T: Send, F: Fn(&R) -> T + Sync + Send
        {
            routes.par_iter().map(f).collect()
        }
    } else {
        pub fn map_routes<R, T, F>(routes: &[R], f: F) -> Vec<T>
            where F: Fn(&R) -> T
        {
            routes.iter().map(f).collect()
        }
    }
}
