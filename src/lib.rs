pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod constants;
    pub mod elementary;
    pub mod scalar;
    pub mod vec3;

    pub mod function {
        pub mod realfunction;
        pub mod polynomial;
        pub mod polynomialmanager;
    }

    pub mod integration {
        pub mod integrationerror;
        pub mod solver;
        pub mod integraljob;
    }
}
