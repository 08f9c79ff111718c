use super::channel::Channel;
use super::coefficient::Coefficient;

/// Independent channels sampled at the same rate, e.g. one per sensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterBank<const N: usize> {
    channels: [Channel; N],
}

impl<const N: usize> FilterBank<N> {
    pub fn new(seeds: [u16; N], coefficient: Coefficient) -> Self {
        Self {
            channels: seeds.map(|seed| Channel::new(seed, coefficient)),
        }
    }

    pub fn tick(&mut self, inputs: &[u16; N]) -> [u16; N] {
        for (channel, input) in self.channels.iter_mut().zip(inputs) {
            channel.tick(*input);
        }
        self.outputs()
    }

    pub fn reset(&mut self, seeds: [u16; N]) {
        for (channel, seed) in self.channels.iter_mut().zip(seeds) {
            channel.reset(seed);
        }
    }

    pub fn outputs(&self) -> [u16; N] {
        core::array::from_fn(|i| self.channels[i].output())
    }

    pub fn channel(&self, index: usize) -> Option<&Channel> {
        self.channels.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_do_not_share_state() {
        let mut bank = FilterBank::new([100, 200, 300], Coefficient::from_raw(26));
        assert_eq!(bank.tick(&[200, 200, 300]), [103, 200, 300]);
        assert_eq!(bank.tick(&[200, 100, 300]), [105, 197, 300]);
    }

    #[test]
    fn channel_access() {
        let bank = FilterBank::new([1, 2], Coefficient::MAX);
        assert_eq!(bank.channel(1).map(Channel::output), Some(2));
        assert!(bank.channel(2).is_none());
    }

    #[test]
    fn reset_resettles_every_channel() {
        let mut bank = FilterBank::new([0; 4], Coefficient::from_raw(64));
        bank.tick(&[1000; 4]);
        bank.reset([5, 6, 7, 8]);
        assert_eq!(bank.outputs(), [5, 6, 7, 8]);
    }
}
