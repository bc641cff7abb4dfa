pub mod gravitron_vis2d;
