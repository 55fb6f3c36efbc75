use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use compact_math::{
        angle,
        evaluate::{self, BinaryOp},
        scalar,
    };

    #[derive(Debug, Parser)]
    #[command(about = "Evaluate small vector and angle computations", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Add two vectors given as 4 (2D) or 6 (3D) components
        Add {
            #[arg(required = true, allow_negative_numbers = true)]
            components: Vec<f32>,
        },
        /// Subtract the second vector from the first, given as 4 (2D) or 6
        /// (3D) components
        Sub {
            #[arg(required = true, allow_negative_numbers = true)]
            components: Vec<f32>,
        },
        /// Normalize a vector given as 2 or 3 components
        Normalize {
            #[arg(required = true, allow_negative_numbers = true)]
            components: Vec<f32>,
        },
        /// Compute the magnitude of a vector given as 2 or 3 components
        Magnitude {
            #[arg(required = true, allow_negative_numbers = true)]
            components: Vec<f32>,
        },
        /// Scale a vector given as 2 or 3 components
        Scale {
            #[arg(required = true, allow_negative_numbers = true)]
            components: Vec<f32>,

            /// Factor to multiply each component with
            #[arg(long, allow_negative_numbers = true)]
            by: f32,
        },
        /// Dot product of two 3D vectors given as 6 components
        Dot {
            #[arg(required = true, allow_negative_numbers = true)]
            components: Vec<f32>,
        },
        /// Cross product of two 3D vectors given as 6 components
        Cross {
            #[arg(required = true, allow_negative_numbers = true)]
            components: Vec<f32>,
        },
        /// Convert an angle from degrees to radians
        ToRadians {
            #[arg(allow_negative_numbers = true)]
            degrees: f32,
        },
        /// Convert an angle from radians to degrees
        ToDegrees {
            #[arg(allow_negative_numbers = true)]
            radians: f32,
        },
        /// Cotangent of an angle in radians
        Cotan {
            #[arg(allow_negative_numbers = true)]
            radians: f32,
        },
        /// Clamp a value to a range (the range is not validated)
        Clamp {
            #[arg(allow_negative_numbers = true)]
            value: f32,
            #[arg(allow_negative_numbers = true)]
            min: f32,
            #[arg(allow_negative_numbers = true)]
            max: f32,
        },
    }

    fn run(command: Command) -> Result<String> {
        Ok(match command {
            Command::Add { components } => {
                evaluate::binary(BinaryOp::Add, &components)?.to_string()
            }
            Command::Sub { components } => {
                evaluate::binary(BinaryOp::Sub, &components)?.to_string()
            }
            Command::Normalize { components } => evaluate::normalize(&components)?.to_string(),
            Command::Magnitude { components } => evaluate::magnitude(&components)?.to_string(),
            Command::Scale { components, by } => evaluate::scale(&components, by)?.to_string(),
            Command::Dot { components } => evaluate::dot(&components)?.to_string(),
            Command::Cross { components } => {
                let mut output = String::new();
                evaluate::write_components(&mut output, evaluate::cross(&components)?.as_array())?;
                output
            }
            Command::ToRadians { degrees } => angle::to_radians(degrees).to_string(),
            Command::ToDegrees { radians } => angle::to_degrees(radians).to_string(),
            Command::Cotan { radians } => scalar::cotan(radians).to_string(),
            Command::Clamp { value, min, max } => scalar::clamp(value, min, max).to_string(),
        })
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        log::debug!("Running command {:?}", cli.command);

        let output = run(cli.command)?;
        println!("{output}");
        Ok(())
    }

}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }

    #[cfg(test)]
    mod tests {
        #[test]
        fn running_without_cli_feature_fails() {
            assert!(super::main().is_err());
        }
    }
}

fn main() -> Result<()> {
    main::main()
}
