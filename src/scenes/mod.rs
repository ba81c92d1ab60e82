mod city;

pub use city::CityScene;
