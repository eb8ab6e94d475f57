// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM

mod api;

pub use api::ApiError;
