pub mod publish_release;
